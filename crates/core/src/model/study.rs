use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::ids::FlashcardId;

/// Term/definition pair shown on a flip card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub id: FlashcardId,
    pub term: String,
    pub definition: String,
}

/// An exam content domain and its share of the exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    pub name: String,
    pub weight_percent: u8,
    pub topics: Vec<String>,
}

impl DomainInfo {
    /// Weight formatted the way the exam outline prints it (`41%`).
    #[must_use]
    pub fn weight_label(&self) -> String {
        format!("{}%", self.weight_percent)
    }

    /// First `n` topics, used for compact domain cards.
    #[must_use]
    pub fn headline_topics(&self, n: usize) -> &[String] {
        &self.topics[..self.topics.len().min(n)]
    }
}

//
// ─── LANGUAGE ──────────────────────────────────────────────────────────────────
//

/// The two label sets the app ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "EN")]
    En,
}

impl Language {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
