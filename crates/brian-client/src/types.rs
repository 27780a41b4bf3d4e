//! Request and response types for the Brian API.
//!
//! These types mirror the provider's API contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard `{ "result": T }` response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    /// The payload.
    pub result: T,
}

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Action extracted from a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Swap one token for another.
    #[serde(rename = "swap")]
    Swap,
    /// Send tokens to an address.
    #[serde(rename = "transfer")]
    Transfer,
    /// Move tokens across chains.
    #[serde(rename = "bridge")]
    Bridge,
    /// Read a token balance.
    #[serde(rename = "balance")]
    Balance,
    /// Wrap the native currency (ETH to WETH).
    #[serde(rename = "wrapEth", alias = "wrap native")]
    WrapNative,
    /// Unwrap the wrapped native currency.
    #[serde(rename = "unwrapEth", alias = "unwrap native")]
    UnwrapNative,
    /// Deposit into a protocol.
    #[serde(rename = "deposit")]
    Deposit,
    /// Withdraw from a protocol.
    #[serde(rename = "withdraw")]
    Withdraw,
    /// Stake tokens.
    #[serde(rename = "stake")]
    Stake,
    /// Approve a token allowance.
    #[serde(rename = "approve")]
    Approve,
    /// Borrow from a lending protocol.
    #[serde(rename = "borrow")]
    Borrow,
    /// Repay a loan.
    #[serde(rename = "repay")]
    Repay,
    /// Register an ENS name.
    #[serde(rename = "ENS Registration")]
    EnsRegistration,
    /// Renew an ENS name.
    #[serde(rename = "ENS Renewal")]
    EnsRenewal,
    /// Borrow on AAVE.
    #[serde(rename = "AAVE Borrow")]
    AaveBorrow,
    /// Repay on AAVE.
    #[serde(rename = "AAVE Repay")]
    AaveRepay,
    /// Deposit into AAVE.
    #[serde(rename = "AAVE Deposit")]
    AaveDeposit,
    /// Withdraw from AAVE.
    #[serde(rename = "AAVE Withdraw")]
    AaveWithdraw,
    /// Read AAVE account data.
    #[serde(rename = "AAVE User Data")]
    AaveUserData,
}

// ─────────────────────────────────────────────────────────────────────────────
// Ask
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /agent/knowledge`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// The question.
    pub prompt: String,
    /// Knowledge base to answer from.
    pub kb: String,
}

impl AskRequest {
    /// Create a new ask request.
    pub fn new(prompt: impl Into<String>, kb: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            kb: kb.into(),
        }
    }
}

/// Answer from the knowledge agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResult {
    /// Generated answer.
    pub text: String,
    /// Documents the answer was grounded on.
    #[serde(default)]
    pub source_documents: Vec<SourceDocument>,
}

/// A document used to ground an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    /// Content excerpt.
    pub page_content: String,
    /// Document metadata.
    #[serde(default)]
    pub metadata: SourceDocumentMetadata,
}

/// Metadata attached to a source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameter extraction
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /agent/parameters-extraction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractParametersRequest {
    /// Prompt to extract parameters from.
    pub prompt: String,
}

impl ExtractParametersRequest {
    /// Create a new extraction request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractParametersResult {
    /// The prompt as normalized by the provider.
    pub prompt: String,
    /// One completion per detected intent.
    #[serde(default)]
    pub completion: Vec<Completion>,
}

/// A single structured extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// Extracted action.
    pub action: Action,
    /// First token (source token for swaps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token1: Option<String>,
    /// Second token (destination token for swaps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token2: Option<String>,
    /// Chain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Address or ENS name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Amount as written in the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Destination chain for bridges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_chain: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Code generation
// ─────────────────────────────────────────────────────────────────────────────

/// Who sent a context message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    /// The end user.
    User,
    /// The Brian agent.
    Brian,
}

/// A prior conversation message given as context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMessage {
    /// Message author.
    pub sender: MessageSender,
    /// Message text.
    pub content: String,
}

impl ContextMessage {
    /// A message written by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: MessageSender::User,
            content: content.into(),
        }
    }

    /// A message written by the agent.
    pub fn brian(content: impl Into<String>) -> Self {
        Self {
            sender: MessageSender::Brian,
            content: content.into(),
        }
    }
}

/// Request body for `POST /agent/smart-contracts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateCodeRequest {
    /// Description of the contract to generate.
    pub prompt: String,
    /// Prior conversation, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ContextMessage>,
    /// Ask the provider to compile the generated source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<bool>,
}

impl GenerateCodeRequest {
    /// Create a new code generation request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Attach prior conversation messages.
    pub fn with_messages(mut self, messages: Vec<ContextMessage>) -> Self {
        self.messages = messages;
        self
    }

    /// Request compilation of the generated source.
    pub fn with_compile(mut self, compile: bool) -> Self {
        self.compile = Some(compile);
        self
    }
}

/// Generated source code, with compiled artifacts when requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Contract source.
    pub code: String,
    /// Contract ABI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Value>,
    /// Deployment bytecode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
}

/// `result` of the code generation endpoint: a bare source string, or an
/// object carrying the source and its compiled artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum GeneratedCodePayload {
    Source(String),
    Compiled {
        #[serde(alias = "contract", alias = "result")]
        code: String,
        #[serde(default)]
        abi: Option<Value>,
        #[serde(default)]
        bytecode: Option<String>,
    },
}

impl From<GeneratedCodePayload> for GeneratedCode {
    fn from(payload: GeneratedCodePayload) -> Self {
        match payload {
            GeneratedCodePayload::Source(code) => GeneratedCode {
                code,
                abi: None,
                bytecode: None,
            },
            GeneratedCodePayload::Compiled {
                code,
                abi,
                bytecode,
            } => GeneratedCode {
                code,
                abi,
                bytecode,
            },
        }
    }
}

/// Remove markdown code fences from generated source.
///
/// Drops every "```solidity" opener, then every remaining "```".
pub fn strip_markdown_fences(source: &str) -> String {
    source.replace("```solidity", "").replace("```", "")
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /agent/transaction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// What the user wants to do.
    pub prompt: String,
    /// Wallet address the transactions are built for.
    pub address: String,
    /// Chain to build on, when the prompt does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl TransactionRequest {
    /// Create a new transaction request.
    pub fn new(prompt: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            address: address.into(),
            chain_id: None,
        }
    }

    /// Set the chain id.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

/// Whether a transaction result reads state or requires signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Reads on-chain state, nothing to sign.
    Read,
    /// Must be signed and submitted.
    Write,
}

/// One transaction plan produced by a solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Solver that produced this result.
    pub solver: String,
    /// Action being performed.
    pub action: Action,
    /// Read or write.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Transaction details.
    pub data: TransactionData,
}

/// Details of a transaction plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    /// Text of the transaction, as older API versions report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calls to execute in order.
    #[serde(default)]
    pub steps: Vec<TransactionStep>,
    #[serde(
        default,
        rename = "gasCostUSD",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas_cost_usd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_token: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_amount_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_token: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
}

/// One on-chain call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStep {
    /// Chain to submit on.
    pub chain_id: u64,
    /// Block the step was simulated against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Sender address.
    pub from: String,
    /// Target address.
    pub to: String,
    /// Native value in wei, as a decimal string.
    pub value: String,
    /// Calldata, hex encoded.
    pub data: String,
}

/// Token descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub chain_id: u64,
    pub symbol: String,
    pub decimals: u8,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_key: Option<String>,
    #[serde(default, rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, rename = "priceUSD", skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Utilities
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /utils/compile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileRequest {
    /// Solidity source or a description of it.
    pub prompt: String,
    /// Contract to compile.
    pub contract_name: String,
}

impl CompileRequest {
    /// Create a new compile request.
    pub fn new(prompt: impl Into<String>, contract_name: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            contract_name: contract_name.into(),
        }
    }
}

/// Response body of `POST /utils/compile`. Not wrapped in `result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    /// Contract ABI.
    pub abi: Value,
    /// Deployment bytecode.
    pub bytecode: String,
    /// Name of the generated source file.
    pub file_name: String,
}

/// Request body for `POST /utils/explain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Code to explain.
    pub prompt: String,
}

impl ExplainRequest {
    /// Create a new explain request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// A network supported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Chain id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Native currency of the chain.
    pub native_currency: NativeCurrency,
}

/// Native currency of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

// ─────────────────────────────────────────────────────────────────────────────
// Knowledge bases
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKnowledgeBaseRequest {
    /// Knowledge base name.
    pub name: String,
    /// What the knowledge base contains.
    pub description: String,
}

impl CreateKnowledgeBaseRequest {
    /// Create a new request.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A provider-hosted knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    /// Knowledge base ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// URL-safe identifier, usable as the `kb` of an ask request.
    pub slug: String,
    /// Creation time (ISO 8601).
    pub created_at: String,
    /// Resources indexed into this knowledge base.
    #[serde(default)]
    pub resources: Vec<KnowledgeBaseResource>,
}

/// A resource indexed into a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseResource {
    /// Resource ID.
    pub id: u64,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type (link, file, ...).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Where the resource was loaded from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Creation time (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Additional provider metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
