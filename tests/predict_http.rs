//! Integration tests for HttpPredictionClient and Analyzer.
//!
//! Uses wiremock for HTTP mocking. Tests cover the request body, response
//! mapping, non-2xx and malformed responses, and the optional retry policy.

use std::time::Duration;

use review_sentiment::config::{ApiConfig, RetryConfig};
use review_sentiment::display::Tone;
use review_sentiment::error::{ANALYSIS_FAILED_MESSAGE, EMPTY_REVIEW_MESSAGE};
use review_sentiment::{Analyzer, ClientError, HttpPredictionClient, PredictionClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_config(mock_server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: mock_server.uri(),
        ..Default::default()
    }
}

fn create_test_client(mock_server: &MockServer) -> HttpPredictionClient {
    HttpPredictionClient::new(&api_config(mock_server)).expect("failed to create client")
}

#[tokio::test]
async fn test_predict_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"review": "I loved this product"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"category": "Electronics", "rating": 4})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let prediction = client
        .predict("I loved this product")
        .await
        .expect("predict failed");

    assert_eq!(prediction.category, "Electronics");
    assert_eq!(prediction.rating.value(), 4);
}

#[tokio::test]
async fn test_end_to_end_positive_review() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"category": "Electronics", "rating": 4})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::new(create_test_client(&mock_server));
    let view = analyzer.analyze("I loved this product").await;

    let card = view.result.expect("expected a result card");
    assert_eq!(card.category, "Electronics");
    assert_eq!(card.summary, "Positive (4/4)");
    assert_eq!(card.icon, "👍");
    assert_eq!(card.tone, Tone::Green);
}

#[tokio::test]
async fn test_empty_review_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::new(create_test_client(&mock_server));
    let view = analyzer.analyze("").await;

    assert_eq!(view.error.as_deref(), Some(EMPTY_REVIEW_MESSAGE));
    assert!(view.result.is_none());
}

#[tokio::test]
async fn test_server_error_is_generic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.predict("fine").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));

    let analyzer = Analyzer::new(client);
    let view = analyzer.analyze("fine").await;
    assert_eq!(view.error.as_deref(), Some(ANALYSIS_FAILED_MESSAGE));
    assert!(view.result.is_none());
    assert!(!view.busy);
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"label": "positive"})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.predict("text").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_rating_out_of_range() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"category": "Books", "rating": 5})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.predict("text").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let config = ApiConfig {
        // Nothing listens on the discard port
        base_url: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    };
    let client = HttpPredictionClient::new(&config).unwrap();

    let err = client.predict("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.predict("once").await.is_err());
}

#[tokio::test]
async fn test_configured_retry_on_5xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"category": "Garden", "rating": 2})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        retry: RetryConfig {
            max_attempts: 3,
            backoff_ms: 10,
        },
        ..api_config(&mock_server)
    };
    let client = HttpPredictionClient::new(&config).unwrap();

    let prediction = client.predict("retry me").await.expect("retry should succeed");
    assert_eq!(prediction.category, "Garden");
}

#[tokio::test]
async fn test_retry_skips_4xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        retry: RetryConfig {
            max_attempts: 3,
            backoff_ms: 10,
        },
        ..api_config(&mock_server)
    };
    let client = HttpPredictionClient::new(&config).unwrap();
    assert!(client.predict("bad request").await.is_err());
}

#[tokio::test]
async fn test_timeout_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"category": "Slow", "rating": 3}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        timeout_secs: Some(1),
        ..api_config(&mock_server)
    };
    let client = HttpPredictionClient::new(&config).unwrap();

    let err = client.predict("slow").await.unwrap_err();
    assert!(err.is_request_error());
}
