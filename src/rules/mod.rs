// src/rules/mod.rs
pub mod profile;
pub mod table;

pub use profile::{FALLBACK_LANGUAGE, LanguageProfile, LanguageTable, ResponseRule, TableError};
