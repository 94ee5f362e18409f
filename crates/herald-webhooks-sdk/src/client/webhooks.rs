//! Webhook resource operations.
//!
//! The six operations of the webhook management API: register, list, get,
//! enable, disable, and delete. Every operation runs under the client's
//! application namespace and completes with the normalized
//! [`ApiResponse`](crate::ApiResponse) envelope.
//!
//! Operations that take a webhook id accept it bare or URI-qualified and
//! reduce it to the canonical UUID before building the request path. An id
//! that does not reduce leaves the path segment empty; the API answers such
//! a request with an error status, which comes back in the envelope like
//! any other.
//!
//! Each operation also has a callback-style variant (`*_with`) that spawns
//! the call onto the ambient tokio runtime and hands the result to a
//! closure instead of being awaited.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::WebhooksClient;
use crate::error::ApiError;
use crate::identifier::to_uuid;
use crate::ApiResult;

/// Parameters for registering a webhook.
///
/// `target_url`, `events`, and `secret` are required; registration is
/// rejected locally, in that order, when any of them is empty. `config` is
/// an optional free-form JSON object stored with the webhook and echoed
/// back in every delivery.
///
/// # Examples
///
/// ```
/// use herald_webhooks_sdk::RegisterWebhook;
/// use serde_json::json;
///
/// let params = RegisterWebhook {
///     target_url: "https://example.com/hooks".into(),
///     events: vec!["message.sent".into(), "message.delivered".into()],
///     secret: "shared-secret".into(),
///     config: Some(json!({ "team": "integrations" })),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegisterWebhook {
    /// URL the API will deliver webhook events to
    pub target_url: String,
    /// Event types the webhook subscribes to
    pub events: Vec<String>,
    /// Shared secret used to sign deliveries
    pub secret: String,
    /// Optional free-form configuration echoed back in deliveries
    pub config: Option<Value>,
}

/// Wire format for a registration request.
#[derive(Serialize)]
struct RegisterBody<'a> {
    target_url: &'a str,
    events: &'a [String],
    secret: &'a str,
    config: &'a Value,
    version: &'a str,
}

impl WebhooksClient {
    /// Register a new webhook for this application.
    ///
    /// The parameters are validated before anything goes on the wire: a
    /// missing target URL, an empty event list, or a missing secret fails
    /// immediately, in that order, without a network call. An omitted
    /// `config` is sent as an empty object.
    ///
    /// The API never echoes the secret back; on a completed exchange the
    /// caller's secret is attached to the response body.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use herald_webhooks_sdk::{RegisterWebhook, WebhooksClient};
    /// # async fn example(client: &WebhooksClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let response = client
    ///     .register(RegisterWebhook {
    ///         target_url: "https://example.com/hooks".into(),
    ///         events: vec!["message.sent".into()],
    ///         secret: "shared-secret".into(),
    ///         config: None,
    ///     })
    ///     .await?;
    /// assert!(response.is_success());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if a required parameter is missing or the request
    /// fails at the transport level.
    pub async fn register(&self, params: RegisterWebhook) -> ApiResult {
        if params.target_url.is_empty() {
            return Err(ApiError::MissingTargetUrl);
        }
        if params.events.is_empty() {
            return Err(ApiError::MissingEvents);
        }
        if params.secret.is_empty() {
            return Err(ApiError::MissingSecret);
        }

        debug!(target_url = %params.target_url, "registering webhook");

        let RegisterWebhook {
            target_url,
            events,
            secret,
            config,
        } = params;
        let config = config.unwrap_or_else(|| Value::Object(Map::new()));
        let body = RegisterBody {
            target_url: &target_url,
            events: &events,
            secret: &secret,
            config: &config,
            version: &self.config().version,
        };

        let mut response = self.request_json(Method::POST, "/webhooks", &body).await?;

        // The API never echoes the secret; attach the caller's copy.
        if let Value::Object(fields) = &mut response.body {
            fields.insert("secret".to_string(), Value::String(secret));
        }

        Ok(response)
    }

    /// List every webhook registered for this application.
    pub async fn list(&self) -> ApiResult {
        debug!("listing webhooks");
        self.request(Method::GET, "/webhooks").await
    }

    /// Fetch a single webhook registration by id.
    ///
    /// `webhook_id` may be bare or URI-qualified; it is reduced to its
    /// canonical UUID before the path is built.
    pub async fn get(&self, webhook_id: &str) -> ApiResult {
        debug!(webhook_id = %webhook_id, "fetching webhook");

        let id = to_uuid(webhook_id).unwrap_or_default();
        self.request(Method::GET, &format!("/webhooks/{}", id)).await
    }

    /// Switch a webhook to the active state so deliveries resume.
    pub async fn enable(&self, webhook_id: &str) -> ApiResult {
        debug!(webhook_id = %webhook_id, "enabling webhook");

        let id = to_uuid(webhook_id).unwrap_or_default();
        self.request(Method::POST, &format!("/webhooks/{}/activate", id)).await
    }

    /// Switch a webhook to the inactive state, pausing deliveries.
    pub async fn disable(&self, webhook_id: &str) -> ApiResult {
        debug!(webhook_id = %webhook_id, "disabling webhook");

        let id = to_uuid(webhook_id).unwrap_or_default();
        self.request(Method::POST, &format!("/webhooks/{}/deactivate", id)).await
    }

    /// Delete a webhook registration.
    pub async fn delete(&self, webhook_id: &str) -> ApiResult {
        debug!(webhook_id = %webhook_id, "deleting webhook");

        let id = to_uuid(webhook_id).unwrap_or_default();
        self.request(Method::DELETE, &format!("/webhooks/{}", id)).await
    }

    // ========================================================================
    // Callback-style variants
    // ========================================================================

    /// Callback form of [`register`](Self::register).
    ///
    /// The operation is spawned onto the ambient tokio runtime and the
    /// callback receives exactly the result `register` would produce. The
    /// returned handle resolves once the callback has run.
    pub fn register_with<F>(&self, params: RegisterWebhook, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { callback(client.register(params).await) })
    }

    /// Callback form of [`list`](Self::list).
    pub fn list_with<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { callback(client.list().await) })
    }

    /// Callback form of [`get`](Self::get).
    pub fn get_with<F>(&self, webhook_id: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult) + Send + 'static,
    {
        let client = self.clone();
        let webhook_id = webhook_id.into();
        tokio::spawn(async move { callback(client.get(&webhook_id).await) })
    }

    /// Callback form of [`enable`](Self::enable).
    pub fn enable_with<F>(&self, webhook_id: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult) + Send + 'static,
    {
        let client = self.clone();
        let webhook_id = webhook_id.into();
        tokio::spawn(async move { callback(client.enable(&webhook_id).await) })
    }

    /// Callback form of [`disable`](Self::disable).
    pub fn disable_with<F>(&self, webhook_id: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult) + Send + 'static,
    {
        let client = self.clone();
        let webhook_id = webhook_id.into();
        tokio::spawn(async move { callback(client.disable(&webhook_id).await) })
    }

    /// Callback form of [`delete`](Self::delete).
    pub fn delete_with<F>(&self, webhook_id: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult) + Send + 'static,
    {
        let client = self.clone();
        let webhook_id = webhook_id.into();
        tokio::spawn(async move { callback(client.delete(&webhook_id).await) })
    }
}

#[cfg(test)]
#[path = "webhooks_tests.rs"]
mod tests;
