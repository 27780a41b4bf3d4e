//! Agent API.
//!
//! Natural-language endpoints under `/agent`.

use crate::client::BrianClient;
use crate::error::{Result, StatusMap};
use crate::types::{
    AskRequest, AskResult, ExtractParametersRequest, ExtractParametersResult, GenerateCodeRequest,
    GeneratedCode, GeneratedCodePayload, ResultEnvelope, TransactionRequest, TransactionResult,
    strip_markdown_fences,
};

impl BrianClient {
    /// Ask a question against a knowledge base.
    pub async fn ask(&self, request: AskRequest) -> Result<AskResult> {
        let response: ResultEnvelope<AskResult> = self
            .post("agent/knowledge", &request, StatusMap::DEFAULT)
            .await?;
        Ok(response.result)
    }

    /// Extract structured parameters from a prompt.
    pub async fn extract_parameters(
        &self,
        request: ExtractParametersRequest,
    ) -> Result<ExtractParametersResult> {
        let response: ResultEnvelope<ExtractParametersResult> = self
            .post("agent/parameters-extraction", &request, StatusMap::DEFAULT)
            .await?;
        Ok(response.result)
    }

    /// Generate smart contract code, stripping markdown fences from the source.
    pub async fn generate_code(&self, request: GenerateCodeRequest) -> Result<GeneratedCode> {
        self.generate_code_with(request, true).await
    }

    /// Generate smart contract code.
    ///
    /// With `strip_markdown` unset the source is returned exactly as received.
    pub async fn generate_code_with(
        &self,
        request: GenerateCodeRequest,
        strip_markdown: bool,
    ) -> Result<GeneratedCode> {
        let response: ResultEnvelope<GeneratedCodePayload> = self
            .post("agent/smart-contracts", &request, StatusMap::DEFAULT)
            .await?;

        let mut generated = GeneratedCode::from(response.result);
        if strip_markdown {
            generated.code = strip_markdown_fences(&generated.code);
        }
        Ok(generated)
    }

    /// Build the transactions needed to carry out a prompt.
    pub async fn transact(&self, request: TransactionRequest) -> Result<Vec<TransactionResult>> {
        let response: ResultEnvelope<Vec<TransactionResult>> = self
            .post("agent/transaction", &request, StatusMap::DEFAULT)
            .await?;
        Ok(response.result)
    }
}
