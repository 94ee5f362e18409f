//! # Herald Webhooks SDK
//!
//! Client SDK for the webhook management API of the Herald platform:
//! register webhooks for an application, inspect them, flip them between
//! active and inactive, and remove them.
//!
//! This SDK provides:
//! - A [`WebhooksClient`] scoped to one application, with bearer-token
//!   authentication on every request
//! - Async operations plus callback-style variants for every endpoint
//! - A normalized [`ApiResponse`] envelope carrying the HTTP status and the
//!   parsed JSON body
//! - Canonical identifier handling for URI-qualified resource ids
//!
//! HTTP statuses are reported, not judged: a 404 or 422 from the API still
//! completes as an [`ApiResponse`]. Only rejected input and transport-level
//! failures surface as [`ApiError`].
//!
//! # Examples
//!
//! ## Registering a webhook
//!
//! ```rust,no_run
//! use herald_webhooks_sdk::{RegisterWebhook, WebhooksClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhooksClient::builder(
//!     "<api token>",
//!     "herald:///apps/staging/24f43c32-4d95-11e4-b3a2-0aa94b0003fe",
//! )
//! .build()?;
//!
//! let response = client
//!     .register(RegisterWebhook {
//!         target_url: "https://example.com/hooks".into(),
//!         events: vec!["message.sent".into(), "message.delivered".into()],
//!         secret: "shared-secret".into(),
//!         config: None,
//!     })
//!     .await?;
//!
//! println!("status: {}, webhook: {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Managing an existing webhook
//!
//! ```rust,no_run
//! # use herald_webhooks_sdk::WebhooksClient;
//! # async fn example(client: &WebhooksClient) -> Result<(), Box<dyn std::error::Error>> {
//! let webhooks = client.list().await?;
//!
//! let id = "8d2c2f48-4d95-11e4-b3a2-0aa94b0003fe";
//! client.disable(id).await?;
//!
//! let current = client.get(id).await?;
//! if current.is_success() {
//!     println!("state: {}", current.body["status"]);
//! }
//! # let _ = webhooks;
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod client;
pub mod error;
pub mod identifier;

// Re-export commonly used types at crate root for convenience
pub use client::{
    ApiResponse, ClientConfig, RegisterWebhook, WebhooksClient, WebhooksClientBuilder,
};
pub use error::{ApiError, ConfigError};
pub use identifier::to_uuid;

/// Standard result type for webhook API operations.
pub type ApiResult = Result<ApiResponse, ApiError>;
