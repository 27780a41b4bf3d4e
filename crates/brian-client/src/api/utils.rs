//! Utility API.

use crate::client::BrianClient;
use crate::error::{Result, StatusMap};
use crate::types::{CompileRequest, CompileResponse, ExplainRequest, Network, ResultEnvelope};

impl BrianClient {
    /// Compile a contract.
    ///
    /// The provider returns the artifacts at the top level of the body,
    /// without a `result` wrapper.
    pub async fn compile(&self, request: CompileRequest) -> Result<CompileResponse> {
        self.post("utils/compile", &request, StatusMap::DEFAULT).await
    }

    /// Explain a piece of code. `None` is a valid answer.
    pub async fn explain(&self, request: ExplainRequest) -> Result<Option<String>> {
        let response: ResultEnvelope<Option<String>> = self
            .post("utils/explain", &request, StatusMap::DEFAULT)
            .await?;
        Ok(response.result)
    }

    /// List the networks supported by the provider.
    pub async fn networks(&self) -> Result<Vec<Network>> {
        let response: ResultEnvelope<Vec<Network>> =
            self.get("utils/networks", StatusMap::DEFAULT).await?;
        Ok(response.result)
    }
}
