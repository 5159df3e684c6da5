// src/services/engine.rs
use crate::{
    error::AppError,
    rules::LanguageTable,
    services::{chatbot::select_response, model_client::ModelChatbot},
};

/// The responder a running service answers with. Exactly one is configured.
#[derive(Debug, Clone)]
pub enum Engine {
    Rules(LanguageTable),
    Model(ModelChatbot),
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Rules(_) => "rules",
            Engine::Model(_) => "model",
        }
    }

    pub async fn respond(&self, message: &str, language: &str) -> Result<String, AppError> {
        match self {
            Engine::Rules(table) => Ok(select_response(table, message, language)?.to_string()),
            Engine::Model(model) => Ok(model.generate_response(message, language).await),
        }
    }

    pub fn supported_languages(&self) -> Vec<String> {
        match self {
            Engine::Rules(table) => table.supported_languages(),
            Engine::Model(model) => model.supported_languages(),
        }
    }
}
