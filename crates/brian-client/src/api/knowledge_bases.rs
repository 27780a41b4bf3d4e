//! Knowledge bases API.

use crate::client::BrianClient;
use crate::error::{Result, StatusMap};
use crate::types::{CreateKnowledgeBaseRequest, KnowledgeBase, ResultEnvelope};

/// Knowledge bases API client.
pub struct KnowledgeBasesApi {
    client: BrianClient,
}

impl KnowledgeBasesApi {
    pub(crate) fn new(client: BrianClient) -> Self {
        Self { client }
    }

    /// Create a new knowledge base.
    pub async fn create(&self, request: CreateKnowledgeBaseRequest) -> Result<KnowledgeBase> {
        let response: ResultEnvelope<KnowledgeBase> = self
            .client
            .post("knowledge-bases", &request, StatusMap::DEFAULT)
            .await?;
        Ok(response.result)
    }

    /// List the knowledge bases owned by the API key.
    pub async fn list(&self) -> Result<Vec<KnowledgeBase>> {
        let response: ResultEnvelope<Vec<KnowledgeBase>> = self
            .client
            .get("knowledge-bases", StatusMap::DEFAULT)
            .await?;
        Ok(response.result)
    }

    /// Get a knowledge base by ID.
    pub async fn get(&self, id: u64) -> Result<KnowledgeBase> {
        let response: ResultEnvelope<KnowledgeBase> = self
            .client
            .get(&format!("knowledge-bases/{}", id), StatusMap::LOOKUP)
            .await?;
        Ok(response.result)
    }

    /// Delete a knowledge base. Returns the provider's confirmation, `"ok"`.
    pub async fn delete(&self, id: u64) -> Result<String> {
        let response: ResultEnvelope<String> = self
            .client
            .delete(&format!("knowledge-bases/{}", id), StatusMap::LOOKUP)
            .await?;
        Ok(response.result)
    }
}
