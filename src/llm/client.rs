use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::prompts::{build_demand_prompt, SYSTEM_PROMPT};
use crate::models::DraftResult;

/// Configuration for the drafting-service client
#[derive(Debug, Clone)]
pub struct DraftServiceConfig {
    /// API key (from OPENAI_API_KEY env var)
    pub api_key: String,
    /// Chat completions endpoint
    pub base_url: String,
    /// Model to use (e.g., "gpt-4o")
    pub model: String,
    /// Temperature (0-1, lower = more deterministic)
    pub temperature: f64,
}

impl DraftServiceConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            base_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o".to_string(),
            temperature: 0.2,
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url,
            model,
            temperature: 0.2,
        }
    }
}

/// Client for the letter-drafting service (OpenAI-compatible chat API)
pub struct DraftServiceClient {
    client: Client,
    config: DraftServiceConfig,
}

impl DraftServiceClient {
    pub fn new(config: DraftServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Draft a letter for one citizen demand.
    ///
    /// Single blocking request, no retry: any network failure, non-2xx
    /// status, or malformed/missing-field JSON body is surfaced to the
    /// caller as a hard error. The returned body is fed to the paragraph
    /// normalizer without pre-validation.
    pub async fn draft(&self, demand: &str) -> Result<DraftResult> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: Some(self.config.temperature),
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: build_demand_prompt(demand),
                },
            ],
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to drafting service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Drafting service error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse drafting service response")?;

        let content = response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .context("No choices in drafting service response")?;

        let draft: DraftResult = serde_json::from_str(content)
            .context("Drafting service returned malformed letter JSON")?;

        Ok(draft)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    response_format: ResponseFormat,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_response_content() {
        let json = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "{\"assunto\": \"Poda\", \"resumo\": \"R.\", \"texto\": \"A.\\n\\nB.\\n\\nC.\"}"
                }
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let draft: DraftResult =
            serde_json::from_str(&response.choices[0].message.content).unwrap();

        assert_eq!(draft.subject, "Poda");
        assert_eq!(draft.body.split("\n\n").count(), 3);
    }

    #[test]
    fn test_request_serializes_json_object_format() {
        let request = ChatRequest {
            model: "gpt-4o".to_string(),
            temperature: Some(0.2),
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            messages: vec![],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
    }
}
