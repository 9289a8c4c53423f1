use super::{GenerationError, GenerationOptions, TextGeneration};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Client for an OpenAI-compatible chat completions endpoint
pub struct OpenAiGeneration {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiGeneration {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[async_trait]
impl TextGeneration for OpenAiGeneration {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: GenerationOptions,
    ) -> Result<String, GenerationError> {
        let mut body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": options.temperature,
            "max_tokens": options.max_tokens,
        });

        if options.structured {
            body["response_format"] = json!({ "type": "json_object" });
        }

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.to_string())
            .ok_or_else(|| {
                GenerationError::MalformedResponse("missing choices[0].message.content".to_string())
            })
    }
}
