// SPDX-License-Identifier: MPL-2.0
//! Section enumeration for top-level navigation.

/// Sections the user can navigate between. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Monuments,
    Map,
    Quiz,
    VirtualTour,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Monuments,
        Section::Map,
        Section::Quiz,
        Section::VirtualTour,
    ];

    /// Stable identifier used by deep links and launcher flags.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Monuments => "monumenti",
            Section::Map => "mappa",
            Section::Quiz => "quiz",
            Section::VirtualTour => "virtual-tour",
        }
    }

    /// Parses an identifier; unknown ids yield `None` so callers can keep
    /// the previous section untouched.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Tab label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Monuments => "Monumenti",
            Section::Map => "Mappa",
            Section::Quiz => "Quiz",
            Section::VirtualTour => "Tour Virtuale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn unknown_id_parses_to_none() {
        assert_eq!(Section::from_id("castello"), None);
        assert_eq!(Section::from_id(""), None);
    }
}
