//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::api::KnowledgeBasesApi;
use crate::error::{Error, Result, StatusMap, parse_cause};

/// Production host of the Brian API.
pub const DEFAULT_BASE_URL: &str = "https://api.brianknows.org";

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v0";

/// Every API key issued by the provider starts with this prefix.
pub const API_KEY_PREFIX: &str = "brian_";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BRIAN_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BRIAN_API_URL";

/// Environment variable overriding the API version.
pub const API_VERSION_ENV: &str = "BRIAN_API_VERSION";

/// Timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-brian-api-key";

/// Brian API client.
///
/// Agent and utility operations are methods on the client itself; the
/// knowledge-base resource family is reached through [`BrianClient::kb`].
/// Cloning is cheap and clones share the same configuration.
///
/// # Example
///
/// ```no_run
/// use brian_client::{AskRequest, BrianClient};
///
/// # async fn example() -> brian_client::Result<()> {
/// let client = BrianClient::builder()
///     .api_key("brian_xxxxxxxxxxxx")
///     .build()?;
///
/// let answer = client
///     .ask(AskRequest::new("What is Uniswap?", "public-knowledge-box"))
///     .await?;
/// println!("{}", answer.text);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BrianClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client with the authentication headers installed.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// API version path segment.
    pub(crate) api_version: String,
}

impl std::fmt::Debug for BrianClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrianClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_version", &self.inner.api_version)
            .finish_non_exhaustive()
    }
}

impl BrianClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the production API with the given key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client configured from `BRIAN_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env().build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Access the knowledge-bases API.
    pub fn kb(&self) -> KnowledgeBasesApi {
        KnowledgeBasesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("api/{}/{}", self.inner.api_version, path))
            .map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T>(&self, path: &str, statuses: StatusMap) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch::<T, ()>(Method::GET, path, None, statuses).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B, statuses: StatusMap) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        self.dispatch(Method::POST, path, Some(body), statuses).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T>(&self, path: &str, statuses: StatusMap) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch::<T, ()>(Method::DELETE, path, None, statuses).await
    }

    /// Send one request and map the response.
    ///
    /// Failure statuses are classified through `statuses` and never parsed
    /// as `T`. Success bodies are parsed as `T` exactly as received.
    async fn dispatch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        statuses: StatusMap,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(method = %method, url = %url, "Sending Brian API request");

        let mut request = self
            .inner
            .http
            .request(method.clone(), url)
            .timeout(REQUEST_TIMEOUT);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error = statuses.error_for(status.as_u16(), parse_cause(&bytes));
            tracing::warn!(
                method = %method,
                path,
                status = status.as_u16(),
                kind = %error.kind(),
                "Brian API request failed"
            );
            return Err(error);
        }

        tracing::debug!(
            method = %method,
            path,
            status = status.as_u16(),
            bytes = bytes.len(),
            "Brian API request succeeded"
        );
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Builder for creating a [`BrianClient`].
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    api_version: Option<String>,
    user_agent: Option<String>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_version: None,
            user_agent: None,
        }
    }

    /// Create a builder seeded from `BRIAN_API_KEY`, `BRIAN_API_URL` and
    /// `BRIAN_API_VERSION`. Unset variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Self::new();
        builder.api_key = lookup(API_KEY_ENV);
        builder.base_url = lookup(BASE_URL_ENV).filter(|url| !url.is_empty());
        builder.api_version = lookup(API_VERSION_ENV).filter(|v| !v.is_empty());
        builder
    }

    /// Set the base URL of the API host.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API version path segment.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    ///
    /// Only validates configuration; no request is sent.
    pub fn build(self) -> Result<BrianClient> {
        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::init("Invalid API key: an API key is required")),
        };
        if !api_key.starts_with(API_KEY_PREFIX) {
            return Err(Error::init(format!(
                "Invalid API key: expected the \"{API_KEY_PREFIX}\" prefix"
            )));
        }

        // Parse and normalize base URL
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url)
            .map_err(|e| Error::init(format!("Invalid base URL {base_url}: {e}")))?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let api_version = self
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let api_version = api_version.trim_matches('/').to_string();
        if api_version.is_empty() {
            return Err(Error::init("API version must not be empty"));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut key_value = HeaderValue::from_str(&api_key)
            .map_err(|_| Error::init("Invalid API key: not a valid header value"))?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("brian-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::init(format!("HTTP client setup failed: {e}")))?;

        tracing::debug!(base_url = %base_url, api_version = %api_version, "Brian client ready");

        Ok(BrianClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_version,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const KEY: &str = "brian_test_key";

    #[test]
    fn test_builder_requires_api_key() {
        let err = ClientBuilder::new().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Initialization);
    }

    #[test]
    fn test_builder_rejects_empty_api_key() {
        let err = ClientBuilder::new().api_key("").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Initialization);
    }

    #[test]
    fn test_builder_rejects_wrong_prefix() {
        let err = BrianClient::new("wrong").unwrap_err();
        assert!(matches!(err, Error::Initialization { .. }));

        let err = BrianClient::new("brian").unwrap_err();
        assert!(matches!(err, Error::Initialization { .. }));
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = ClientBuilder::new()
            .api_key(KEY)
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Initialization);
    }

    #[test]
    fn test_builder_defaults() {
        let client = BrianClient::new(KEY).unwrap();

        assert_eq!(client.base_url().as_str(), "https://api.brianknows.org/");
        assert_eq!(client.api_version(), "v0");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .api_key(KEY)
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .api_key(KEY)
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        let url = client.url("agent/knowledge").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v0/agent/knowledge");

        let url = client.url("/knowledge-bases/7").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v0/knowledge-bases/7");
    }

    #[test]
    fn test_url_building_with_path_prefix_and_version() {
        let client = ClientBuilder::new()
            .api_key(KEY)
            .base_url("http://localhost:8080/proxy")
            .api_version("/v1/")
            .build()
            .unwrap();

        let url = client.url("utils/networks").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/v1/utils/networks");
    }

    #[test]
    fn test_from_lookup() {
        let builder = ClientBuilder::from_lookup(|name| match name {
            API_KEY_ENV => Some(KEY.to_string()),
            BASE_URL_ENV => Some("http://127.0.0.1:9999".to_string()),
            _ => None,
        });
        let client = builder.build().unwrap();

        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9999/");
        assert_eq!(client.api_version(), "v0");
    }

    #[test]
    fn test_from_lookup_without_key_fails() {
        let err = ClientBuilder::from_lookup(|_| None).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Initialization);
    }

    #[test]
    fn test_builder_debug_redacts_api_key() {
        let builder = ClientBuilder::new()
            .api_key(KEY)
            .base_url("http://localhost:8080");
        let debug = format!("{:?}", builder);

        assert!(!debug.contains(KEY));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("http://localhost:8080"));
    }

    #[test]
    fn test_clones_share_configuration() {
        let client = BrianClient::new(KEY).unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.inner, &clone.inner));
    }
}
