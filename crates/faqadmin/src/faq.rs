//! Core FAQ record types for faqadmin.
//!
//! This module defines the fundamental data structures for representing
//! FAQ entries as they appear in the backing file shared with the chatbot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The language an FAQ entry is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Urdu in Arabic script.
    Urdu,
    /// Urdu transliterated into the Latin alphabet.
    #[serde(rename = "Roman Urdu")]
    RomanUrdu,
}

impl Language {
    /// All languages in the order selection menus present them.
    pub const ALL: [Self; 3] = [Self::English, Self::Urdu, Self::RomanUrdu];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Urdu => write!(f, "Urdu"),
            Self::RomanUrdu => write!(f, "Roman Urdu"),
        }
    }
}

/// A single FAQ entry served to the chatbot.
///
/// The serialized field names and the array-of-objects layout of the backing
/// file are the wire contract with the chatbot consumer; they must stay
/// stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Opaque unique identifier, generated at creation, never changed.
    pub id: String,

    /// The question text.
    pub question: String,

    /// The answer text.
    pub answer: String,

    /// Free-form category label (e.g. "Admission Requirements").
    pub category: String,

    /// The language the entry is written in.
    pub language: Language,
}

impl FaqEntry {
    /// Create a new entry with a freshly generated random id.
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            language,
        }
    }

    /// Overwrite the four content fields in place, keeping the id.
    pub fn overwrite(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        language: Language,
    ) {
        self.question = question.into();
        self.answer = answer.into();
        self.category = category.into();
        self.language = language;
    }

    /// Human-readable label used in selection lists.
    ///
    /// The id is appended to disambiguate entries with identical questions.
    #[must_use]
    pub fn selection_label(&self) -> String {
        format!("{} ({})", self.question, self.id)
    }
}
