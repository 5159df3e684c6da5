// src/services/chatbot.rs
use tracing::debug;

use crate::rules::{LanguageProfile, LanguageTable, ResponseRule, TableError};

const GREETING_KEYWORDS: &[&str] = &[
    "hi", "hello", "hey", "bonjour", "hola", "你好", "こんにちは", "नमस्ते", "ẹ nlẹ́", "salut",
    "buenos dias",
];

const HOW_ARE_YOU_KEYWORDS: &[&str] = &[
    "how are you", "comment ca va", "que tal", "お元気ですか", "कैसे हो", "báwo ni", "como estas",
];

const FAREWELL_KEYWORDS: &[&str] = &[
    "bye", "goodbye", "au revoir", "adios", "さようなら", "अलविदा", "ó dàbọ̀", "hasta luego",
];

/// Cross-language intents recognised when no profile rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    HowAreYou,
    Farewell,
}

impl Intent {
    fn reply(self, profile: &LanguageProfile) -> &'static str {
        match self {
            Intent::Greeting => profile.greeting(),
            Intent::HowAreYou => profile.how_are_you_reply(),
            Intent::Farewell => profile.farewell(),
        }
    }
}

/// Lowercase and trim. Scripts without case pass through unchanged.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

pub fn detect_intent(msg: &str) -> Option<Intent> {
    detect_normalized_intent(&normalize(msg))
}

fn detect_normalized_intent(msg: &str) -> Option<Intent> {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| msg.contains(k));

    if contains_any(GREETING_KEYWORDS) {
        Some(Intent::Greeting)
    } else if contains_any(HOW_ARE_YOU_KEYWORDS) {
        Some(Intent::HowAreYou)
    } else if contains_any(FAREWELL_KEYWORDS) {
        Some(Intent::Farewell)
    } else {
        None
    }
}

/// First profile rule whose trigger occurs in `msg`, in declaration order.
///
/// A nested rule only answers when one of its sub-triggers also occurs;
/// otherwise scanning continues with the next rule.
fn match_profile_rule(profile: &LanguageProfile, msg: &str) -> Option<&'static str> {
    for &(trigger, rule) in profile.responses {
        if !msg.contains(trigger) {
            continue;
        }
        match rule {
            ResponseRule::Plain(response) => return Some(response),
            ResponseRule::Nested(nested) => {
                let hit = nested
                    .iter()
                    .find(|(sub_trigger, _)| msg.contains(sub_trigger))
                    .map(|&(_, response)| response);
                if hit.is_some() {
                    return hit;
                }
            }
        }
    }
    None
}

/// Pick the canned reply for `message` in `language`.
///
/// Unknown languages use the fallback profile. Tiers, first hit wins:
/// profile rules, then the cross-language keyword sets, then the profile
/// default. Fails only when the table has no fallback profile.
pub fn select_response(
    table: &LanguageTable,
    message: &str,
    language: &str,
) -> Result<&'static str, TableError> {
    let msg = normalize(message);
    let profile = table.resolve(language)?;

    if let Some(response) = match_profile_rule(profile, &msg) {
        debug!(language, profile = profile.code, "matched profile rule");
        return Ok(response);
    }

    if let Some(intent) = detect_normalized_intent(&msg) {
        debug!(language, profile = profile.code, ?intent, "matched keyword set");
        return Ok(intent.reply(profile));
    }

    debug!(language, profile = profile.code, "no match, using default");
    Ok(profile.default)
}
