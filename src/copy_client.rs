use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time;

use crate::domain::company_name::CompanyName;
use crate::domain::copy_field::CopyField;

const REQUEST_TIMEOUT: time::Duration = time::Duration::from_secs(10);

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that generates compelling \
    marketing copy for startups. Be concise, clear, and exciting.";

// Fixed generation parameters: short answers, a bit of creative spread.
const MAX_COMPLETION_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.8;

/// Client for the external chat-completion API that fills in landing-page copy.
pub struct CopyClient {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: Option<Secret<String>>,
}

#[derive(thiserror::Error, Debug)]
pub enum CopyClientError {
    #[error("The copy generation API key is not configured.")]
    MissingApiKeyError,
    #[error("The copy generation request failed.")]
    RequestError(#[from] reqwest::Error),
}

#[derive(serde::Serialize)]
pub struct ChatCompletionBody {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(serde::Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl CopyClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<Secret<String>>,
        timeout: Option<time::Duration>,
    ) -> CopyClient {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .unwrap();

        CopyClient {
            http_client,
            base_url,
            model,
            api_key,
        }
    }

    /// Asks the generator for one candidate and returns its trimmed text, or an
    /// empty string when the response carries no usable content. No retries:
    /// a failed generation is terminal for the current request.
    pub async fn generate(
        &self,
        company_name: &CompanyName,
        field: CopyField,
    ) -> Result<String, CopyClientError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(CopyClientError::MissingApiKeyError)?;

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatCompletionBody {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: String::from("system"),
                    content: String::from(SYSTEM_INSTRUCTION),
                },
                ChatMessage {
                    role: String::from("user"),
                    content: field.instruction(company_name.as_ref()),
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        let completion: ChatCompletionResponse = self
            .http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()? // return an error when server response status code is 4xx or 5xx
            .json()
            .await?;

        let text = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        Ok(text)
    }
}
