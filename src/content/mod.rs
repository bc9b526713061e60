// SPDX-License-Identifier: MPL-2.0
//! Embedded reference content: monuments, map locations, quiz, tours.
//!
//! Content is authored as TOML under `assets/content/` and embedded at compile
//! time. [`Catalog::load`] parses everything once at startup; a parse failure
//! is a packaging defect, reported to the caller instead of panicking.

mod types;

pub use types::{
    Category, Choice, LocationEntry, MonumentEntry, QuizChoice, QuizQuestion, TourLocation,
};

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

/// Fallback external maps link when a location carries none.
const TOWN_MAPS_URL: &str =
    "https://maps.google.com/maps?q=37.6395,14.6351&ll=37.6395,14.6351&z=14";

#[derive(Debug, Deserialize)]
struct MonumentsFile {
    monuments: Vec<MonumentEntry>,
}

#[derive(Debug, Deserialize)]
struct LocationsFile {
    default_maps_url: String,
    locations: Vec<LocationEntry>,
}

#[derive(Debug, Deserialize)]
struct QuizFile {
    questions: Vec<QuizQuestion>,
    answer_key: BTreeMap<String, Choice>,
}

#[derive(Debug, Deserialize)]
struct ToursFile {
    tours: Vec<TourLocation>,
}

/// Correct answers indexed by question number.
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    by_question: BTreeMap<u8, Choice>,
}

impl AnswerKey {
    /// The correct choice for question `question` (1-based), if defined.
    #[must_use]
    pub fn correct(&self, question: u8) -> Option<Choice> {
        self.by_question.get(&question).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}

/// All authored reference data, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub monuments: Vec<MonumentEntry>,
    pub locations: Vec<LocationEntry>,
    pub questions: Vec<QuizQuestion>,
    pub answer_key: AnswerKey,
    pub tours: Vec<TourLocation>,
    default_maps_url: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            monuments: Vec::new(),
            locations: Vec::new(),
            questions: Vec::new(),
            answer_key: AnswerKey::default(),
            tours: Vec::new(),
            default_maps_url: TOWN_MAPS_URL.to_string(),
        }
    }
}

impl Catalog {
    /// Parses all embedded content tables.
    pub fn load() -> Result<Self> {
        let monuments: MonumentsFile = parse_asset("monuments.toml")?;
        let locations: LocationsFile = parse_asset("locations.toml")?;
        let quiz: QuizFile = parse_asset("quiz.toml")?;
        let tours: ToursFile = parse_asset("tours.toml")?;

        let mut by_question = BTreeMap::new();
        for (key, choice) in quiz.answer_key {
            let number = key
                .strip_prefix('q')
                .and_then(|n| n.parse::<u8>().ok())
                .ok_or_else(|| Error::Content(format!("invalid answer key entry: {key}")))?;
            by_question.insert(number, choice);
        }

        Ok(Self {
            monuments: monuments.monuments,
            locations: locations.locations,
            questions: quiz.questions,
            answer_key: AnswerKey { by_question },
            tours: tours.tours,
            default_maps_url: locations.default_maps_url,
        })
    }

    #[must_use]
    pub fn monument(&self, id: &str) -> Option<&MonumentEntry> {
        self.monuments.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn location(&self, id: &str) -> Option<&LocationEntry> {
        self.locations.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn tour(&self, id: &str) -> Option<&TourLocation> {
        self.tours.iter().find(|t| t.id == id)
    }

    /// Monuments showcased on the home screen.
    pub fn featured_monuments(&self) -> impl Iterator<Item = &MonumentEntry> {
        self.monuments.iter().filter(|m| m.featured)
    }

    /// External maps link for `location_id`, falling back to the town view.
    #[must_use]
    pub fn maps_url_for(&self, location_id: &str) -> &str {
        self.location(location_id)
            .map_or(self.default_maps_url.as_str(), |l| l.maps_url.as_str())
    }
}

fn parse_asset<T: serde::de::DeserializeOwned>(name: &str) -> Result<T> {
    let file = Asset::get(name)
        .ok_or_else(|| Error::Content(format!("missing embedded content file: {name}")))?;
    let text = std::str::from_utf8(file.data.as_ref())
        .map_err(|e| Error::Content(format!("{name}: {e}")))?;
    toml::from_str(text).map_err(|e| Error::Content(format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_embedded_content() {
        let catalog = Catalog::load().expect("embedded content should parse");
        assert_eq!(catalog.monuments.len(), 13);
        assert_eq!(catalog.locations.len(), 7);
        assert_eq!(catalog.questions.len(), 10);
        assert_eq!(catalog.tours.len(), 6);
    }

    #[test]
    fn answer_key_matches_authored_content() {
        let catalog = Catalog::load().expect("embedded content should parse");
        let expected = [
            Choice::B,
            Choice::B,
            Choice::B,
            Choice::B,
            Choice::B,
            Choice::B,
            Choice::C,
            Choice::B,
            Choice::B,
            Choice::C,
        ];
        for (index, choice) in expected.iter().enumerate() {
            let question = index as u8 + 1;
            assert_eq!(catalog.answer_key.correct(question), Some(*choice));
        }
        assert_eq!(catalog.answer_key.len(), 10);
    }

    #[test]
    fn every_question_has_a_correct_choice_listed() {
        let catalog = Catalog::load().expect("embedded content should parse");
        for question in &catalog.questions {
            let correct = catalog
                .answer_key
                .correct(question.id)
                .expect("every question is in the key");
            assert!(
                question.choices.iter().any(|c| c.key == correct),
                "question {} lacks its correct choice",
                question.id
            );
        }
    }

    #[test]
    fn unknown_lookups_return_none() {
        let catalog = Catalog::load().expect("embedded content should parse");
        assert!(catalog.monument("atlantide").is_none());
        assert!(catalog.location("atlantide").is_none());
        assert!(catalog.tour("atlantide").is_none());
    }

    #[test]
    fn maps_url_falls_back_to_town_view() {
        let catalog = Catalog::load().expect("embedded content should parse");
        assert!(catalog.maps_url_for("san-basilio").contains("37.6526434"));
        assert!(catalog.maps_url_for("atlantide").contains("37.6395"));
    }

    #[test]
    fn featured_monuments_are_a_strict_subset() {
        let catalog = Catalog::load().expect("embedded content should parse");
        let featured = catalog.featured_monuments().count();
        assert!(featured > 0);
        assert!(featured < catalog.monuments.len());
    }
}
