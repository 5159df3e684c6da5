// src/services/mod.rs
pub mod chatbot;
pub mod engine;
pub mod model_client;
