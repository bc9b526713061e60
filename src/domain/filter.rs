// SPDX-License-Identifier: MPL-2.0
//! Search and category filtering over the monument directory.
//!
//! Pure visibility computation without any UI concern: the directory view and
//! the map read the same [`FilterState`] so markers always agree with the
//! list.

use crate::content::{Category, MonumentEntry};

/// Category selector: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if this filter matches the given category.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Human-readable name used in filter feedback.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "Tutti i luoghi",
            Self::Only(category) => category.display_name(),
        }
    }
}

/// Current search text and category selection.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    search_text: String,
    active_category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
    }

    /// Visibility predicate: category must match, and the search text (when
    /// non-empty) must appear case-insensitively in the title or description.
    #[must_use]
    pub fn matches(&self, title: &str, description: &str, category: Category) -> bool {
        if !self.active_category.matches(category) {
            return false;
        }
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
    }

    /// Entries of `monuments` visible under the current filter, in catalog
    /// order.
    #[must_use]
    pub fn visible_monuments<'a>(&self, monuments: &'a [MonumentEntry]) -> Vec<&'a MonumentEntry> {
        monuments
            .iter()
            .filter(|m| self.matches(&m.name, &m.description, m.category))
            .collect()
    }

    /// Number of visible entries, shown in the results counter.
    #[must_use]
    pub fn visible_count(&self, monuments: &[MonumentEntry]) -> usize {
        self.visible_monuments(monuments).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, description: &str, category: Category) -> MonumentEntry {
        MonumentEntry {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            audio_guide: None,
            featured: false,
        }
    }

    fn sample() -> Vec<MonumentEntry> {
        vec![
            entry(
                "san-basilio",
                "Chiesa Madre di San Basilio",
                "Centro spirituale della città",
                Category::Religioso,
            ),
            entry(
                "lago-pozzillo",
                "Lago Pozzillo",
                "Bacino artificiale con attività ricreative",
                Category::Natura,
            ),
            entry(
                "museo-civico",
                "Museo Civico",
                "Reperti archeologici dal territorio",
                Category::Cultura,
            ),
        ]
    }

    #[test]
    fn empty_filter_shows_everything() {
        let filter = FilterState::new();
        assert_eq!(filter.visible_count(&sample()), 3);
    }

    #[test]
    fn search_matches_title_and_description_case_insensitively() {
        let mut filter = FilterState::new();
        filter.set_search_text("LAGO");
        assert_eq!(filter.visible_count(&sample()), 1);

        filter.set_search_text("archeologici");
        let visible = filter.visible_monuments(&sample());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "museo-civico");
    }

    #[test]
    fn category_and_search_combine_with_and() {
        let mut filter = FilterState::new();
        filter.set_category(CategoryFilter::Only(Category::Natura));
        filter.set_search_text("chiesa");
        assert_eq!(filter.visible_count(&sample()), 0);

        filter.set_search_text("lago");
        assert_eq!(filter.visible_count(&sample()), 1);
    }

    #[test]
    fn applying_the_same_filter_twice_is_idempotent() {
        let monuments = sample();
        let mut filter = FilterState::new();
        filter.set_search_text("chiesa");
        filter.set_category(CategoryFilter::Only(Category::Religioso));
        let first: Vec<_> = filter
            .visible_monuments(&monuments)
            .iter()
            .map(|m| m.id.clone())
            .collect();

        filter.set_search_text("chiesa");
        filter.set_category(CategoryFilter::Only(Category::Religioso));
        let second: Vec<_> = filter
            .visible_monuments(&monuments)
            .iter()
            .map(|m| m.id.clone())
            .collect();

        assert_eq!(first, second);
        assert_eq!(filter.visible_count(&monuments), first.len());
    }

    #[test]
    fn filter_order_is_commutative() {
        let monuments = sample();

        let mut text_first = FilterState::new();
        text_first.set_search_text("o");
        text_first.set_category(CategoryFilter::Only(Category::Cultura));

        let mut category_first = FilterState::new();
        category_first.set_category(CategoryFilter::Only(Category::Cultura));
        category_first.set_search_text("o");

        let a: Vec<_> = text_first
            .visible_monuments(&monuments)
            .iter()
            .map(|m| m.id.clone())
            .collect();
        let b: Vec<_> = category_first
            .visible_monuments(&monuments)
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn display_names_cover_all_filters() {
        assert_eq!(CategoryFilter::All.display_name(), "Tutti i luoghi");
        assert_eq!(
            CategoryFilter::Only(Category::Natura).display_name(),
            "Natura e Paesaggio"
        );
    }
}
