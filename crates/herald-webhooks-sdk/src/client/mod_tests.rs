//! Tests for the Herald API client module.

use super::*;

const TOKEN: &str = "test-api-token";
const APP_ID: &str = "24f43c32-4d95-11e4-b3a2-0aa94b0003fe";
const WEBHOOK_ID: &str = "8d2c2f48-4d95-11e4-b3a2-0aa94b0003fe";

// ============================================================================
// ClientConfig Tests
// ============================================================================

mod client_config_tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = ClientConfig::new(TOKEN, APP_ID);

        assert_eq!(config.token, TOKEN);
        assert_eq!(config.app_id, APP_ID);
        assert_eq!(config.api_url, "https://api.herald.chat");
        assert_eq!(config.version, "1.0");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(
            config.user_agent,
            format!("herald-webhooks-sdk/{}", env!("CARGO_PKG_VERSION"))
        );
        assert!(!config.debug);
    }

    #[test]
    fn test_config_method_chaining() {
        let config = ClientConfig::new(TOKEN, APP_ID)
            .with_api_url("https://staging.herald.chat")
            .with_version("1.1")
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("integration-bot/2.0")
            .with_debug(true);

        assert_eq!(config.api_url, "https://staging.herald.chat");
        assert_eq!(config.version, "1.1");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "integration-bot/2.0");
        assert!(config.debug);
    }

    #[test]
    fn test_config_debug_output_hides_token() {
        let config = ClientConfig::new("super-secret-token", APP_ID);

        let debug_output = format!("{:?}", config);

        assert!(!debug_output.contains("super-secret-token"));
        assert!(debug_output.contains("<redacted>"));
        assert!(debug_output.contains(APP_ID));
    }
}

// ============================================================================
// Client Construction Tests
// ============================================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_builder_with_defaults() {
        let client = WebhooksClient::builder(TOKEN, APP_ID).build();

        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.config().api_url, "https://api.herald.chat");
        assert_eq!(client.config().version, "1.0");
        assert_eq!(client.app_id(), APP_ID);
    }

    #[test]
    fn test_builder_fluent_interface() {
        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .api_url("https://staging.herald.chat")
            .version("2.0")
            .timeout(Duration::from_secs(2))
            .user_agent("fluent-bot/1.0")
            .debug(true)
            .build()
            .unwrap();

        assert_eq!(client.config().api_url, "https://staging.herald.chat");
        assert_eq!(client.config().version, "2.0");
        assert_eq!(client.config().timeout, Duration::from_secs(2));
        assert_eq!(client.config().user_agent, "fluent-bot/1.0");
        assert!(client.config().debug);
    }

    #[test]
    fn test_builder_accepts_prebuilt_config() {
        let config = ClientConfig::new(TOKEN, APP_ID).with_version("1.1");

        let client = WebhooksClient::builder("ignored", "ignored")
            .config(config)
            .build()
            .unwrap();

        assert_eq!(client.config().version, "1.1");
        assert_eq!(client.config().token, TOKEN);
    }

    #[test]
    fn test_new_from_config() {
        let client = WebhooksClient::new(ClientConfig::new(TOKEN, APP_ID));

        assert!(client.is_ok());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let result = WebhooksClient::builder("", APP_ID).build();

        match result {
            Err(ConfigError::MissingToken) => (),
            other => panic!("Expected MissingToken, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_app_id_is_rejected() {
        let result = WebhooksClient::builder(TOKEN, "").build();

        match result {
            Err(ConfigError::InvalidAppId { value }) => assert_eq!(value, ""),
            other => panic!("Expected InvalidAppId, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_app_id_is_rejected() {
        let result = WebhooksClient::builder(TOKEN, "12345").build();

        match result {
            Err(ConfigError::InvalidAppId { value }) => assert_eq!(value, "12345"),
            other => panic!("Expected InvalidAppId, got {:?}", other),
        }
    }

    /// URI-qualified application ids reduce to the bare UUID at build time.
    #[test]
    fn test_qualified_app_id_is_normalized() {
        let qualified = format!("herald:///apps/staging/{}", APP_ID);

        let client = WebhooksClient::builder(TOKEN, qualified).build().unwrap();

        assert_eq!(client.app_id(), APP_ID);
    }

    #[test]
    fn test_app_id_keeps_its_casing() {
        let upper = "24F43C32-4D95-11E4-B3A2-0AA94B0003FE";

        let client = WebhooksClient::builder(TOKEN, upper).build().unwrap();

        assert_eq!(client.app_id(), upper);
    }

    #[test]
    fn test_custom_http_client_is_accepted() {
        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .http_client(reqwest::Client::new())
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_clients_are_cloneable() {
        let client = WebhooksClient::builder(TOKEN, APP_ID).build().unwrap();
        let clone = client.clone();

        assert_eq!(clone.app_id(), client.app_id());
    }
}

// ============================================================================
// ApiResponse Tests
// ============================================================================

mod api_response_tests {
    use super::*;

    #[test]
    fn test_is_success_for_2xx() {
        let ok = ApiResponse {
            status: StatusCode::OK,
            body: Value::Null,
        };
        assert!(ok.is_success());

        let created = ApiResponse {
            status: StatusCode::CREATED,
            body: Value::Null,
        };
        assert!(created.is_success());
    }

    #[test]
    fn test_is_success_rejects_error_statuses() {
        let not_found = ApiResponse {
            status: StatusCode::NOT_FOUND,
            body: Value::Null,
        };
        assert!(!not_found.is_success());

        let server_error = ApiResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Value::Null,
        };
        assert!(!server_error.is_success());
    }

    #[test]
    fn test_json_deserializes_body() {
        #[derive(serde::Deserialize)]
        struct Webhook {
            id: String,
            status: String,
        }

        let response = ApiResponse {
            status: StatusCode::OK,
            body: serde_json::json!({ "id": WEBHOOK_ID, "status": "active" }),
        };

        let webhook: Webhook = response.json().unwrap();
        assert_eq!(webhook.id, WEBHOOK_ID);
        assert_eq!(webhook.status, "active");
    }

    #[test]
    fn test_json_reports_mismatched_body() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: serde_json::json!(["a", "b"]),
        };

        let result: Result<std::collections::HashMap<String, String>, _> = response.json();
        assert!(result.is_err());
    }
}

// ============================================================================
// Transport Tests
// ============================================================================

mod transport_tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WebhooksClient {
        WebhooksClient::builder(TOKEN, APP_ID)
            .api_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_requests_carry_auth_and_version_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .and(header("Authorization", "Bearer test-api-token"))
            .and(header("Accept", "application/vnd.herald+json; version=1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).list().await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_configured_version_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .and(header("Accept", "application/vnd.herald+json; version=1.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .api_url(mock_server.uri())
            .version("1.1")
            .build()
            .unwrap();

        let result = client.list().await;

        assert!(result.is_ok());
    }

    /// Error statuses are answers, not failures.
    #[tokio::test]
    async fn test_error_statuses_complete_as_responses() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "message": "internal error" })),
            )
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server).list().await.unwrap();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["message"], "internal error");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_empty_body_parses_as_null() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/apps/{}/webhooks/{}", APP_ID, WEBHOOK_ID)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server).delete(WEBHOOK_ID).await.unwrap();

        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(response.body, Value::Null);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let error = client_for(&mock_server).list().await.unwrap_err();

        match error {
            ApiError::Json(_) => (),
            other => panic!("Expected Json, got {:?}", other),
        }
    }

    /// A connection that cannot be established is a transient network error.
    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Grab a free port and release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .api_url(format!("http://127.0.0.1:{}", port))
            .build()
            .unwrap();

        let error = client.list().await.unwrap_err();

        assert!(error.is_transient());
        match error {
            ApiError::Network(_) => (),
            other => panic!("Expected Network, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_millis(250)),
            )
            .mount(&mock_server)
            .await;

        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .api_url(mock_server.uri())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let error = client.list().await.unwrap_err();

        assert!(error.is_transient());
        match error {
            ApiError::Timeout => (),
            other => panic!("Expected Timeout, got {:?}", other),
        }
    }

    /// The configured timeout binds a caller-supplied HTTP client too.
    #[tokio::test]
    async fn test_timeout_applies_to_supplied_http_client() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_millis(250)),
            )
            .mount(&mock_server)
            .await;

        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .api_url(mock_server.uri())
            .timeout(Duration::from_millis(50))
            .http_client(reqwest::Client::new())
            .build()
            .unwrap();

        let error = client.list().await.unwrap_err();

        match error {
            ApiError::Timeout => (),
            other => panic!("Expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_in_api_url_is_tolerated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/apps/{}/webhooks", APP_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = WebhooksClient::builder(TOKEN, APP_ID)
            .api_url(format!("{}/", mock_server.uri()))
            .build()
            .unwrap();

        let result = client.list().await;

        assert!(result.is_ok());
    }
}
