// src/services/model_client.rs
//! Client for an external inference server hosting the multilingual
//! sequence-to-sequence model.
//!
//! The server owns tokenization, decoding and the model itself. This side
//! only maps the requested language to the model's language token, forwards
//! the generation parameters and returns the decoded text.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::ModelConfig;

/// Language code → target-language token understood by the model.
pub const MODEL_LANGUAGES: &[(&str, &str)] = &[("hi", "hi_IN"), ("te", "te_IN")];

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("inference server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode inference response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub num_beams: u32,
    pub temperature: f32,
    pub no_repeat_ngram_size: u32,
    pub early_stopping: bool,
    pub max_input_length: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 100,
            num_beams: 5,
            temperature: 0.7,
            no_repeat_ngram_size: 2,
            early_stopping: true,
            max_input_length: 512,
        }
    }
}

// --- Wire types ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    forced_bos_lang: &'a str,
    parameters: GenerationParams,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generated_text: Option<String>,
}

/// Model-backed chatbot. Cheap to share: the HTTP client pools connections.
#[derive(Debug, Clone)]
pub struct ModelChatbot {
    client: reqwest::Client,
    base_url: String,
    params: GenerationParams,
}

impl ModelChatbot {
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            params: config.params,
        })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn supported_languages(&self) -> Vec<String> {
        MODEL_LANGUAGES.iter().map(|(code, _)| code.to_string()).collect()
    }

    /// Generate a reply in `language`.
    ///
    /// Failures never escape: they are logged and returned as an
    /// `Error: ...` reply so the caller still gets a response.
    pub async fn generate_response(&self, input: &str, language: &str) -> String {
        match self.try_generate(input, language).await {
            Ok(text) => text,
            Err(e) => {
                error!(language, "error generating response: {e}");
                format!("Error: {e}")
            }
        }
    }

    pub async fn try_generate(&self, input: &str, language: &str) -> Result<String, ModelError> {
        let lang_token = model_language(language)
            .ok_or_else(|| ModelError::UnsupportedLanguage(language.to_string()))?;

        let url = format!("{}/generate", self.base_url);
        let request_id = Uuid::new_v4();
        let start = Instant::now();
        debug!(%request_id, lang_token, "POST {url}");

        let body = GenerateRequest {
            inputs: input,
            forced_bos_lang: lang_token,
            parameters: self.params,
        };

        let resp = self
            .client
            .post(&url)
            .header("x-request-id", request_id.to_string())
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ModelError::Status { status, body });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        let text = parsed
            .generated_text
            .ok_or_else(|| ModelError::Decode("missing generated_text".to_string()))?;

        debug!(
            %request_id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );
        Ok(text)
    }
}

fn model_language(code: &str) -> Option<&'static str> {
    MODEL_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, token)| token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_only_configured_languages() {
        assert_eq!(model_language("hi"), Some("hi_IN"));
        assert_eq!(model_language("te"), Some("te_IN"));
        assert_eq!(model_language("fr"), None);
        assert_eq!(model_language("HI"), None);
    }

    #[test]
    fn default_params_match_the_served_model() {
        let params = GenerationParams::default();
        assert_eq!(params.max_length, 100);
        assert_eq!(params.num_beams, 5);
        assert_eq!(params.no_repeat_ngram_size, 2);
        assert!(params.early_stopping);
    }
}
