//! HTTP client SDK for the Brian agent API.
//!
//! This crate provides a typed client for the Brian natural-language agent
//! endpoints and the knowledge-base resource.
//!
//! # Example
//!
//! ```no_run
//! use brian_client::{BrianClient, ExtractParametersRequest, Result, TransactionRequest};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = BrianClient::builder()
//!     .api_key("brian_xxxxxxxxxxxx")
//!     .build()?;
//!
//! // Extract the intent of a prompt
//! let extraction = client
//!     .extract_parameters(ExtractParametersRequest::new(
//!         "I want to swap 10 USDC with USDT on Polygon",
//!     ))
//!     .await?;
//! for completion in &extraction.completion {
//!     println!("{:?} {:?}", completion.action, completion.amount);
//! }
//!
//! // Build the transactions for it
//! let results = client
//!     .transact(TransactionRequest::new(
//!         "swap 10 USDC for USDT on Polygon",
//!         "0x8D96A4E5B1B1D2F4E5a3C9c1E6D4a8B2F9c0aB11",
//!     ))
//!     .await?;
//! for result in results {
//!     println!("{} produced {} steps", result.solver, result.data.steps.len());
//! }
//!
//! // Knowledge bases
//! for kb in client.kb().list().await? {
//!     println!("{} ({})", kb.name, kb.slug);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Agent**: ask, parameter extraction, code generation, transactions
//! - **Utilities**: compile, explain, supported networks
//! - **Knowledge bases**: create, list, get, delete
//!
//! # Errors
//!
//! Failure statuses map onto [`Error`] variants (400, 404 on single
//! knowledge-base lookups, 429, 500). Other non-success statuses become
//! [`Error::UnexpectedStatus`]. Every variant that came from a response
//! carries the parsed body as its cause.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::KnowledgeBasesApi;
pub use client::{BrianClient, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use types::*;
