// SPDX-License-Identifier: MPL-2.0
//! Record types for the authored reference content.
//!
//! Everything in this module is immutable at runtime: entries are loaded once
//! from the embedded TOML tables and only ever read afterwards.

use serde::Deserialize;

/// Thematic category shared by monuments and map locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Religioso,
    Cultura,
    Natura,
    Tecnologia,
}

impl Category {
    /// Human-readable name used in filter feedback.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Religioso => "Luoghi Religiosi",
            Category::Cultura => "Cultura e Storia",
            Category::Natura => "Natura e Paesaggio",
            Category::Tecnologia => "Tecnologia",
        }
    }
}

/// An entry of the monument directory.
#[derive(Debug, Clone, Deserialize)]
pub struct MonumentEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Audio guide resource, when one has been recorded for this monument.
    pub audio_guide: Option<String>,
    /// Whether the monument is showcased on the home screen.
    #[serde(default)]
    pub featured: bool,
}

/// A location rendered as a marker on the map.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub category: Category,
    pub description: String,
    pub icon: String,
    /// External maps link for the "take me there" popup action.
    pub maps_url: String,
}

/// Answer choice identifier within a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::A => "a",
            Choice::B => "b",
            Choice::C => "c",
            Choice::D => "d",
        }
    }
}

/// One selectable answer of a quiz question.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizChoice {
    pub key: Choice,
    pub text: String,
}

/// A quiz question with its choices, identified by position (1-based).
#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    pub id: u8,
    pub prompt: String,
    pub choices: Vec<QuizChoice>,
}

/// A virtual tour location and its embedded viewer resource.
#[derive(Debug, Clone, Deserialize)]
pub struct TourLocation {
    pub id: String,
    pub name: String,
    pub url: String,
}
