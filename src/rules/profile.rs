// src/rules/profile.rs
use std::collections::HashSet;

use thiserror::Error;

/// Code of the profile used when a requested language is not configured.
pub const FALLBACK_LANGUAGE: &str = "en";

/// What a trigger phrase maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseRule {
    Plain(&'static str),
    /// Sub-trigger → response, checked in order once the outer trigger matched.
    Nested(&'static [(&'static str, &'static str)]),
}

/// Canned phrases and trigger rules for one language.
///
/// `responses` is ordered: the selector returns the first rule that matches.
/// Profiles without specific rules use an empty slice.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub greetings: &'static [&'static str],
    pub how_are_you: &'static [&'static str],
    pub goodbye: &'static [&'static str],
    pub default: &'static str,
    pub responses: &'static [(&'static str, ResponseRule)],
}

impl LanguageProfile {
    pub fn greeting(&self) -> &'static str {
        self.greetings.first().copied().unwrap_or(self.default)
    }

    pub fn how_are_you_reply(&self) -> &'static str {
        self.how_are_you.first().copied().unwrap_or(self.default)
    }

    pub fn farewell(&self) -> &'static str {
        self.goodbye.first().copied().unwrap_or(self.default)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("no profile for fallback language 'en'")]
    MissingFallback,

    #[error("language '{0}' is declared more than once")]
    DuplicateCode(&'static str),

    #[error("language '{code}' has an empty {field}")]
    EmptyField {
        code: &'static str,
        field: &'static str,
    },

    #[error("language '{code}' has an empty trigger phrase")]
    EmptyTrigger { code: &'static str },

    #[error("language '{code}' trigger '{trigger}' is not lowercase and trimmed, it can never match")]
    UnnormalizedTrigger {
        code: &'static str,
        trigger: &'static str,
    },
}

/// Read-only language code → profile table, kept in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct LanguageTable {
    profiles: &'static [LanguageProfile],
}

impl LanguageTable {
    pub const fn new(profiles: &'static [LanguageProfile]) -> Self {
        Self { profiles }
    }

    /// The compiled-in table served by the rule-based engine.
    pub fn builtin() -> Self {
        Self::new(super::table::BUILTIN_PROFILES)
    }

    pub fn get(&self, code: &str) -> Option<&'static LanguageProfile> {
        self.profiles.iter().find(|p| p.code == code)
    }

    /// Profile for `code`, or the fallback profile when `code` is unknown.
    pub fn resolve(&self, code: &str) -> Result<&'static LanguageProfile, TableError> {
        self.get(code)
            .or_else(|| self.get(FALLBACK_LANGUAGE))
            .ok_or(TableError::MissingFallback)
    }

    pub fn profiles(&self) -> &'static [LanguageProfile] {
        self.profiles
    }

    /// Configured codes in declaration order.
    pub fn supported_languages(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.profiles
            .iter()
            .filter(|p| seen.insert(p.code))
            .map(|p| p.code.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for profile in self.profiles {
            if !seen.insert(profile.code) {
                return Err(TableError::DuplicateCode(profile.code));
            }
            validate_profile(profile)?;
        }
        if !seen.contains(FALLBACK_LANGUAGE) {
            return Err(TableError::MissingFallback);
        }
        Ok(())
    }
}

fn validate_profile(profile: &LanguageProfile) -> Result<(), TableError> {
    let code = profile.code;
    let lists = [
        ("greetings", profile.greetings),
        ("how_are_you", profile.how_are_you),
        ("goodbye", profile.goodbye),
    ];
    for (field, phrases) in lists {
        if phrases.iter().all(|p| p.trim().is_empty()) {
            return Err(TableError::EmptyField { code, field });
        }
    }
    if profile.default.trim().is_empty() {
        return Err(TableError::EmptyField { code, field: "default" });
    }

    for &(trigger, rule) in profile.responses {
        check_trigger(code, trigger)?;
        if let ResponseRule::Nested(nested) = rule {
            for &(sub_trigger, _) in nested {
                check_trigger(code, sub_trigger)?;
            }
        }
    }
    Ok(())
}

fn check_trigger(code: &'static str, trigger: &'static str) -> Result<(), TableError> {
    if trigger.trim().is_empty() {
        return Err(TableError::EmptyTrigger { code });
    }
    if trigger.trim() != trigger || trigger.to_lowercase() != trigger {
        return Err(TableError::UnnormalizedTrigger { code, trigger });
    }
    Ok(())
}
