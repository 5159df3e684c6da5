// src/state.rs
use std::sync::Arc;

use crate::{
    config::{Config, EngineKind},
    error::StartupError,
    rules::LanguageTable,
    services::{engine::Engine, model_client::ModelChatbot},
};

pub type SharedState = Arc<AppState>;

/// Read-only after startup; handlers never write to it.
pub struct AppState {
    pub engine: Engine,
}

impl AppState {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Rule-based state over the compiled-in table.
    pub fn with_builtin_rules() -> Self {
        Self::new(Engine::Rules(LanguageTable::builtin()))
    }

    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let engine = match config.engine {
            EngineKind::Rules => {
                let table = LanguageTable::builtin();
                table.validate()?;
                Engine::Rules(table)
            }
            EngineKind::Model => Engine::Model(ModelChatbot::new(&config.model)?),
        };
        Ok(Self::new(engine))
    }
}
