//! Client for the Gemini `generateContent` API

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::AiError;

/// Client for a Gemini-compatible generative-language endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

/// Response from `generateContent`
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Error detail from the API
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Create a new client with the given credentials and request timeout
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, AiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send a prompt with an optional system instruction, return the text answer
    pub async fn generate(&self, system: Option<&str>, prompt: &str) -> Result<String, AiError> {
        let request = GenerateRequest {
            contents: vec![RequestContent::text(prompt)],
            system_instruction: system.map(RequestContent::text),
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => api_err.error.message,
                Err(_) => body,
            };
            return Err(AiError::Status { status, message });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;
        extract_text(&parsed)
    }
}

impl RequestContent {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

/// Concatenate the text parts of the first candidate
pub fn extract_text(response: &GenerateResponse) -> Result<String, AiError> {
    let text: String = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AiError::InvalidResponse("No text content in response".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"world"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&response).unwrap(), "Hello, world");
    }

    #[test]
    fn test_extract_text_without_candidates_is_invalid_response() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        let err = extract_text(&response).unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
        assert!(!err.is_malformed());

        // Safety-blocked prompts come back with feedback and no candidates
        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(extract_text(&blocked), Err(AiError::InvalidResponse(_))));
    }

    #[test]
    fn test_extract_text_with_empty_parts_is_invalid_response() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(extract_text(&response), Err(AiError::InvalidResponse(_))));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(
            "k".into(),
            "gemini-1.5-flash".into(),
            "http://127.0.0.1:9/".into(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest {
            contents: vec![RequestContent::text("hi")],
            system_instruction: Some(RequestContent::text("be brief")),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
    }
}
