//! Herald API client for webhook management operations.
//!
//! This module provides the main `WebhooksClient` for making authenticated
//! calls to the Herald webhook management API. A client is scoped to one
//! application at construction time and every request it sends lives under
//! that application's namespace.

mod webhooks;

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ConfigError};
use crate::identifier::to_uuid;
use crate::ApiResult;

pub use webhooks::RegisterWebhook;

/// Production endpoint of the Herald API.
pub const DEFAULT_API_URL: &str = "https://api.herald.chat";

/// API contract version requested through the `Accept` header.
pub const DEFAULT_API_VERSION: &str = "1.0";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for Herald API client behavior.
///
/// Carries the credentials and application scope along with endpoint,
/// version, and timeout settings.
///
/// # Examples
///
/// ```
/// use herald_webhooks_sdk::client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("<api token>", "24f43c32-4d95-11e4-b3a2-0aa94b0003fe")
///     .with_timeout(Duration::from_secs(5))
///     .with_debug(true);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer token used to authenticate every request
    pub token: String,
    /// Application whose webhooks this client manages (UUID or URI-qualified)
    pub app_id: String,
    /// Herald API base URL
    pub api_url: String,
    /// API contract version sent with every request
    pub version: String,
    /// Request timeout duration
    pub timeout: Duration,
    /// User agent string for API requests
    pub user_agent: String,
    /// Emit a trace line for every completed API call
    pub debug: bool,
}

impl ClientConfig {
    /// Create a configuration for the given credentials with the default
    /// endpoint, version, and timeout.
    pub fn new(token: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            app_id: app_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("herald-webhooks-sdk/{}", env!("CARGO_PKG_VERSION")),
            debug: false,
        }
    }

    /// Set the Herald API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the API contract version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable the per-call trace line.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("app_id", &self.app_id)
            .field("api_url", &self.api_url)
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Normalized response envelope for webhook API calls.
///
/// Every completed HTTP exchange produces one of these, whatever the status
/// code. A 404 or 422 from the API is not an error at this level; callers
/// inspect [`status`](Self::status) to decide what to do with it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code returned by the API
    pub status: StatusCode,
    /// Parsed JSON body, or `Value::Null` when the response body was empty
    pub body: Value,
}

impl ApiResponse {
    /// True when the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the response body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// Herald API client scoped to a single application.
///
/// The client normalizes its application id at construction time, attaches
/// bearer authentication and the version header to every request, and hands
/// back an [`ApiResponse`] for every completed exchange.
///
/// Cloning is cheap and clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// # use herald_webhooks_sdk::WebhooksClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhooksClient::builder(
///     "<api token>",
///     "24f43c32-4d95-11e4-b3a2-0aa94b0003fe",
/// )
/// .build()?;
///
/// let response = client.list().await?;
/// println!("webhooks: {}", response.body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhooksClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl WebhooksClient {
    /// Create a new builder for constructing a webhooks client.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token for the Herald API
    /// * `app_id` - Application id, bare or URI-qualified
    pub fn builder(token: impl Into<String>, app_id: impl Into<String>) -> WebhooksClientBuilder {
        WebhooksClientBuilder::new(token, app_id)
    }

    /// Create a client directly from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token is empty, the application id does
    /// not reduce to a UUID, or the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::from_parts(config, None)
    }

    fn from_parts(
        mut config: ClientConfig,
        http_client: Option<reqwest::Client>,
    ) -> Result<Self, ConfigError> {
        if config.token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let canonical = to_uuid(&config.app_id).map(String::from);
        config.app_id = match canonical {
            Some(id) => id,
            None => {
                return Err(ConfigError::InvalidAppId {
                    value: config.app_id,
                })
            }
        };

        // A supplied client keeps its own pool, proxy, and TLS settings; the
        // configured timeout is applied per request either way.
        let http_client = match http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&config.user_agent)
                .build()?,
        };

        if config.debug {
            debug!(
                version = env!("CARGO_PKG_VERSION"),
                app_id = %config.app_id,
                "initialized webhooks client"
            );
        }

        Ok(Self { http_client, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the canonical application id this client is scoped to.
    pub fn app_id(&self) -> &str {
        &self.config.app_id
    }

    // ========================================================================
    // Request transport
    // ========================================================================

    /// Absolute URL for a path under this client's application namespace.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/apps/{}{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.app_id,
            path
        )
    }

    /// Request builder carrying the auth and version headers plus the
    /// configured timeout.
    fn prepare(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, self.endpoint(path))
            .timeout(self.config.timeout)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header(
                ACCEPT,
                format!(
                    "application/vnd.herald+json; version={}",
                    self.config.version
                ),
            )
    }

    /// Send a request without a body.
    pub(crate) async fn request(&self, method: Method, path: &str) -> ApiResult {
        self.dispatch(self.prepare(method, path)).await
    }

    /// Send a request with a JSON body.
    pub(crate) async fn request_json<T>(&self, method: Method, path: &str, body: &T) -> ApiResult
    where
        T: Serialize + ?Sized,
    {
        self.dispatch(self.prepare(method, path).json(body)).await
    }

    /// Execute a prepared request and normalize the outcome.
    ///
    /// Any response from the API completes as `Ok`, error statuses included.
    /// Only transport failures and unparseable bodies come back as `Err`.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> ApiResult {
        let request = request.build().map_err(transport_error)?;
        let method = request.method().clone();
        let path = request.url().path().to_owned();

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(transport_error)?;
        let status = response.status();

        let bytes = response.bytes().await.map_err(transport_error)?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if self.config.debug {
            debug!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                "api call completed"
            );
        }

        Ok(ApiResponse { status, body })
    }
}

/// Classify a transport failure, keeping timeouts apart from other network
/// errors.
fn transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(error)
    }
}

/// Builder for constructing `WebhooksClient` instances.
#[derive(Debug)]
pub struct WebhooksClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
}

impl WebhooksClientBuilder {
    /// Create a new client builder.
    fn new(token: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(token, app_id),
            http_client: None,
        }
    }

    /// Set the client configuration, replacing any values set so far.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the Herald API base URL.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.config.api_url = api_url.into();
        self
    }

    /// Set the API contract version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable the per-call trace line.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Use a preconfigured HTTP client instead of building one.
    ///
    /// This is the hook for custom TLS, proxy, or connection pool settings.
    /// The configured user agent is not applied to a supplied client.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the webhooks client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token is empty, the application id does
    /// not reduce to a UUID, or the HTTP client cannot be created.
    pub fn build(self) -> Result<WebhooksClient, ConfigError> {
        WebhooksClient::from_parts(self.config, self.http_client)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
