use std::time::Duration;

use reqwest::Client;

use super::error::GeminiError;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Capability interface for single-shot text generation.
///
/// A system instruction plus a user prompt produce text, or fail. The
/// correction and definition stages only depend on this trait, so a
/// different provider is a new implementation rather than a rewrite.
pub trait TextGenerator {
    async fn generate(&self, system_instruction: &str, prompt: &str)
    -> Result<String, GeminiError>;
}

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Holds the model identifier and the generation temperature so both
/// pipeline stages share one deterministic configuration.
pub struct GeminiClient {
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, temperature: f32) -> Self {
        Self::with_base_url(api_key, model, temperature, API_BASE_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(
        api_key: String,
        model: String,
        temperature: f32,
        base_url: String,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            model,
            temperature,
            client,
            base_url,
        }
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let req = GenerateContentRequest {
            system_instruction: Content::system(system_instruction),
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&req)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1000)
                .unwrap_or(1000);
            return Err(GeminiError::RateLimited {
                retry_after_ms: retry_after,
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<GenerateContentResponse>().await?;
        body.text().ok_or(GeminiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> GeminiClient {
        GeminiClient::with_base_url("test-key".into(), "gemini-test".into(), 0.0, base_url)
    }

    #[tokio::test]
    async fn generate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .and(header_exists("x-goog-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {"parts": [{"text": "carbonate mounds"}], "role": "model"},
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let text = client.generate("system", "prompt").await.unwrap();
        assert_eq!(text, "carbonate mounds");
    }

    #[tokio::test]
    async fn generate_maps_429_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client.generate("system", "prompt").await.unwrap_err();
        match err {
            GeminiError::RateLimited { retry_after_ms } => assert_eq!(retry_after_ms, 7000),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_maps_server_error_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client.generate("system", "prompt").await.unwrap_err();
        match err {
            GeminiError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_rejects_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client.generate("system", "prompt").await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }
}
