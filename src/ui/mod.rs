// SPDX-License-Identifier: MPL-2.0
//! UI modules: section views, shared widgets, styling, and notifications.

pub mod design_tokens;
pub mod home;
pub mod icons;
pub mod map_view;
pub mod monuments;
pub mod navbar;
pub mod notifications;
pub mod qr_modal;
pub mod quiz_view;
pub mod styles;
pub mod tour_view;
