// SPDX-License-Identifier: MPL-2.0
//! Virtual tour viewer targeting.
//!
//! The embedded viewer is an external collaborator; this state tracks which
//! resource it shows, whether the `vr=` flag is set in the resource URL, and
//! a reload counter. The viewer ignores in-place flag changes, so every flag
//! flip bumps the reload counter to force a blank-then-restore reload.

use crate::content::TourLocation;

/// State of the embedded tour viewer.
#[derive(Debug, Clone, Default)]
pub struct TourState {
    current_location: Option<String>,
    resource_url: Option<String>,
    reload_nonce: u64,
}

impl TourState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    #[must_use]
    pub fn resource_url(&self) -> Option<&str> {
        self.resource_url.as_deref()
    }

    /// Counter bumped whenever the viewer must reload its resource.
    #[must_use]
    pub fn reload_nonce(&self) -> u64 {
        self.reload_nonce
    }

    /// Whether the current resource has VR mode enabled.
    #[must_use]
    pub fn vr_enabled(&self) -> bool {
        self.resource_url
            .as_deref()
            .is_some_and(|url| url.contains("vr=1"))
    }

    /// Retargets the viewer to the resource for `id`. Unknown ids are a
    /// no-op. Returns the display name of the loaded location.
    pub fn load_location<'a>(&mut self, id: &str, tours: &'a [TourLocation]) -> Option<&'a str> {
        let tour = tours.iter().find(|t| t.id == id)?;
        self.current_location = Some(tour.id.clone());
        self.resource_url = Some(tour.url.clone());
        self.reload_nonce = self.reload_nonce.wrapping_add(1);
        Some(&tour.name)
    }

    /// Flips the `vr=` flag in the resource URL and forces a reload. Returns
    /// the new VR state, or `None` when the resource carries no flag to flip.
    pub fn toggle_vr_mode(&mut self) -> Option<bool> {
        let url = self.resource_url.as_deref()?;
        let flipped = if url.contains("vr=1") {
            url.replace("vr=1", "vr=0")
        } else if url.contains("vr=0") {
            url.replace("vr=0", "vr=1")
        } else {
            return None;
        };
        self.resource_url = Some(flipped);
        self.reload_nonce = self.reload_nonce.wrapping_add(1);
        Some(self.vr_enabled())
    }

    /// Reloads the current resource to reset the viewer's camera. Returns
    /// `false` when nothing is loaded.
    pub fn reset_view(&mut self) -> bool {
        if self.resource_url.is_none() {
            return false;
        }
        self.reload_nonce = self.reload_nonce.wrapping_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tours() -> Vec<TourLocation> {
        vec![
            TourLocation {
                id: "convento".to_string(),
                name: "Convento di Sant'Antonio".to_string(),
                url: "https://tours.example/collection?fs=1&vr=1&sd=1".to_string(),
            },
            TourLocation {
                id: "monumento-caduti".to_string(),
                name: "Monumento ai Caduti".to_string(),
                url: "panoramas/panorama.html?img=caduti.jpg".to_string(),
            },
        ]
    }

    #[test]
    fn load_location_retargets_the_viewer() {
        let mut tour = TourState::new();
        let name = tour.load_location("convento", &tours());
        assert_eq!(name, Some("Convento di Sant'Antonio"));
        assert_eq!(tour.current_location(), Some("convento"));
        assert!(tour.resource_url().unwrap().contains("vr=1"));
    }

    #[test]
    fn unknown_location_is_a_noop() {
        let mut tour = TourState::new();
        tour.load_location("convento", &tours());
        let nonce = tour.reload_nonce();

        assert!(tour.load_location("atlantide", &tours()).is_none());
        assert_eq!(tour.current_location(), Some("convento"));
        assert_eq!(tour.reload_nonce(), nonce);
    }

    #[test]
    fn toggle_vr_flips_the_flag_and_forces_a_reload() {
        let mut tour = TourState::new();
        tour.load_location("convento", &tours());
        assert!(tour.vr_enabled());
        let nonce = tour.reload_nonce();

        assert_eq!(tour.toggle_vr_mode(), Some(false));
        assert!(tour.resource_url().unwrap().contains("vr=0"));
        assert!(tour.reload_nonce() > nonce);

        assert_eq!(tour.toggle_vr_mode(), Some(true));
        assert!(tour.vr_enabled());
    }

    #[test]
    fn toggle_vr_without_a_flag_is_a_noop() {
        let mut tour = TourState::new();
        tour.load_location("monumento-caduti", &tours());
        let nonce = tour.reload_nonce();

        assert_eq!(tour.toggle_vr_mode(), None);
        assert_eq!(tour.reload_nonce(), nonce);
    }

    #[test]
    fn reset_view_reloads_only_when_something_is_loaded() {
        let mut tour = TourState::new();
        assert!(!tour.reset_view());

        tour.load_location("convento", &tours());
        let nonce = tour.reload_nonce();
        assert!(tour.reset_view());
        assert!(tour.reload_nonce() > nonce);
    }
}
