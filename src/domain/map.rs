// SPDX-License-Identifier: MPL-2.0
//! Map view state: center, zoom, markers, and interaction arming.
//!
//! The canvas renders whatever this state says; markers are attached and
//! detached here (never merely hidden) so hit-testing and the popup always
//! operate on what is actually on the map. Scroll-wheel zoom is disabled by
//! default and only armed transiently after the user interacts with the map,
//! so the page scroll is never hijacked.

use crate::content::{Category, LocationEntry};
use crate::domain::filter::CategoryFilter;
use std::time::{Duration, Instant};

/// Default town viewpoint.
pub const TOWN_CENTER: LatLon = LatLon {
    lat: 37.6395,
    lon: 14.6351,
};
pub const DEFAULT_ZOOM: f64 = 13.0;

pub const MIN_ZOOM: f64 = 3.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Padding ratio applied around fitted bounds.
pub const FIT_BOUNDS_PADDING: f64 = 0.1;

/// How long scroll-wheel zoom stays armed after an interaction. Tunable.
pub const SCROLL_ZOOM_ACTIVE_WINDOW: Duration = Duration::from_secs(5);

/// Nominal tile edge used by the mercator projection.
const TILE_SIZE: f64 = 256.0;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Axis-aligned geographic bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: LatLon,
    pub max: LatLon,
}

impl Bounds {
    /// Smallest bounds containing every point. `None` for an empty set.
    #[must_use]
    pub fn containing(points: &[LatLon]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Bounds {
            min: *first,
            max: *first,
        };
        for point in &points[1..] {
            bounds.min.lat = bounds.min.lat.min(point.lat);
            bounds.min.lon = bounds.min.lon.min(point.lon);
            bounds.max.lat = bounds.max.lat.max(point.lat);
            bounds.max.lon = bounds.max.lon.max(point.lon);
        }
        Some(bounds)
    }

    /// Bounds grown by `ratio` of their span on every side.
    #[must_use]
    pub fn padded(&self, ratio: f64) -> Self {
        let lat_pad = (self.max.lat - self.min.lat) * ratio;
        let lon_pad = (self.max.lon - self.min.lon) * ratio;
        Bounds {
            min: LatLon {
                lat: self.min.lat - lat_pad,
                lon: self.min.lon - lon_pad,
            },
            max: LatLon {
                lat: self.max.lat + lat_pad,
                lon: self.max.lon + lon_pad,
            },
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLon {
        LatLon {
            lat: (self.min.lat + self.max.lat) / 2.0,
            lon: (self.min.lon + self.max.lon) / 2.0,
        }
    }
}

/// Runtime projection of a [`LocationEntry`] onto the map.
#[derive(Debug, Clone)]
pub struct Marker {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub position: LatLon,
    pub category: Category,
    attached: bool,
}

impl Marker {
    /// Whether the marker is currently on the map.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// The single map instance's view state.
#[derive(Debug, Clone)]
pub struct MapViewState {
    initialized: bool,
    center: LatLon,
    zoom: f64,
    markers: Vec<Marker>,
    selected: Option<String>,
    scroll_zoom_enabled: bool,
    scroll_zoom_expires: Option<Instant>,
    hint_visible: bool,
    viewport_revision: u64,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl MapViewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            initialized: false,
            center: TOWN_CENTER,
            zoom: DEFAULT_ZOOM,
            markers: Vec::new(),
            selected: None,
            scroll_zoom_enabled: false,
            scroll_zoom_expires: None,
            hint_visible: true,
            viewport_revision: 0,
        }
    }

    /// Realizes the map on first need. Idempotent: subsequent calls change
    /// nothing. Returns `true` only when the map was constructed by this call.
    pub fn ensure_initialized(&mut self, locations: &[LocationEntry]) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.center = TOWN_CENTER;
        self.zoom = DEFAULT_ZOOM;
        self.hint_visible = true;
        self.refresh_markers(locations);
        true
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Requests a redraw after the map container becomes visible again. The
    /// revision feeds the canvas so stale layout is never shown.
    pub fn invalidate_viewport(&mut self) {
        self.viewport_revision = self.viewport_revision.wrapping_add(1);
    }

    #[must_use]
    pub fn viewport_revision(&self) -> u64 {
        self.viewport_revision
    }

    /// Clears and rebuilds the full marker set from the location table.
    pub fn refresh_markers(&mut self, locations: &[LocationEntry]) {
        self.markers = locations
            .iter()
            .map(|location| Marker {
                id: location.id.clone(),
                name: location.name.clone(),
                description: location.description.clone(),
                icon: location.icon.clone(),
                position: LatLon {
                    lat: location.lat,
                    lon: location.lon,
                },
                category: location.category,
                attached: true,
            })
            .collect();
        self.selected = None;
    }

    /// Attaches exactly the markers matching `filter` and adjusts the
    /// viewport: all markers → default view; a specific category → refit to
    /// the visible markers. An empty match leaves the viewport untouched
    /// (bounds of an empty set are undefined).
    pub fn apply_category_filter(&mut self, filter: CategoryFilter) {
        for marker in &mut self.markers {
            marker.attached = filter.matches(marker.category);
        }
        if let Some(selected) = &self.selected {
            let still_attached = self
                .markers
                .iter()
                .any(|m| m.attached && &m.id == selected);
            if !still_attached {
                self.selected = None;
            }
        }

        if filter.is_active() {
            let attached: Vec<LatLon> = self
                .markers
                .iter()
                .filter(|m| m.attached)
                .map(|m| m.position)
                .collect();
            if let Some(bounds) = Bounds::containing(&attached) {
                self.fit_bounds(bounds);
            }
        } else {
            self.center = TOWN_CENTER;
            self.zoom = DEFAULT_ZOOM;
        }
    }

    /// Centers and zooms so the padded bounds are fully in view.
    fn fit_bounds(&mut self, bounds: Bounds) {
        let padded = bounds.padded(FIT_BOUNDS_PADDING);
        self.center = padded.center();
        self.zoom = zoom_for_bounds(&padded);
    }

    /// Marks a user interaction with the map surface: arms scroll-wheel zoom
    /// for [`SCROLL_ZOOM_ACTIVE_WINDOW`] and hides the interaction hint.
    pub fn notice_interaction(&mut self, now: Instant) {
        self.scroll_zoom_enabled = true;
        self.scroll_zoom_expires = Some(now + SCROLL_ZOOM_ACTIVE_WINDOW);
        self.hint_visible = false;
    }

    /// Focus lost: scroll zoom is released immediately.
    pub fn blur(&mut self) {
        self.scroll_zoom_enabled = false;
        self.scroll_zoom_expires = None;
    }

    /// Periodic tick: releases scroll-wheel zoom once its window expires.
    pub fn tick(&mut self, now: Instant) {
        if let Some(expires) = self.scroll_zoom_expires {
            if now >= expires {
                self.scroll_zoom_enabled = false;
                self.scroll_zoom_expires = None;
            }
        }
    }

    /// Whether the tick subscription still has work to do for the map.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.scroll_zoom_expires.is_some()
    }

    #[must_use]
    pub fn scroll_zoom_enabled(&self) -> bool {
        self.scroll_zoom_enabled
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    #[must_use]
    pub fn center(&self) -> LatLon {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Opens the popup for an attached marker. Detached markers cannot be
    /// selected.
    pub fn select_marker(&mut self, id: &str) -> bool {
        let attached = self.markers.iter().any(|m| m.attached && m.id == id);
        if attached {
            self.selected = Some(id.to_string());
        }
        attached
    }

    pub fn close_popup(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_marker(&self) -> Option<&Marker> {
        let selected = self.selected.as_deref()?;
        self.markers.iter().find(|m| m.id == selected)
    }

    pub fn attached_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.attached)
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.markers.iter().filter(|m| m.attached).count()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Projects a coordinate into viewport pixels (Web Mercator), with the
    /// current center mapped to the viewport middle.
    #[must_use]
    pub fn project(&self, point: LatLon, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
        let scale = TILE_SIZE * f64::powf(2.0, self.zoom);
        let (x, y) = mercator_normalized(point);
        let (cx, cy) = mercator_normalized(self.center);
        let px = (x - cx) * scale + f64::from(viewport_width) / 2.0;
        let py = (y - cy) * scale + f64::from(viewport_height) / 2.0;
        (px as f32, py as f32)
    }
}

/// Normalized Web Mercator coordinates in [0, 1].
fn mercator_normalized(point: LatLon) -> (f64, f64) {
    let x = (point.lon + 180.0) / 360.0;
    let lat_rad = point.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0;
    (x, y)
}

/// Zoom level at which `bounds` fits a nominal single-tile viewport.
fn zoom_for_bounds(bounds: &Bounds) -> f64 {
    let lon_span = (bounds.max.lon - bounds.min.lon).abs().max(1e-6);
    let lat_span = (bounds.max.lat - bounds.min.lat).abs().max(1e-6);
    let zoom_lon = (360.0 / lon_span).log2();
    let zoom_lat = (180.0 / lat_span).log2();
    zoom_lon.min(zoom_lat).clamp(MIN_ZOOM, MAX_ZOOM)
}
