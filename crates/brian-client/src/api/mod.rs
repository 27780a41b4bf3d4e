//! API endpoint implementations.

mod agent;
mod knowledge_bases;
mod utils;

pub use knowledge_bases::KnowledgeBasesApi;
