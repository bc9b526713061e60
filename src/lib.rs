// SPDX-License-Identifier: MPL-2.0
//! `regalbuto_heritage` is a tourism guide for the town of Regalbuto built
//! with the Iced GUI framework.
//!
//! It offers a monument directory with search and category filtering, a map
//! with location markers, a heritage quiz, a virtual tour panel, and a QR
//! scanner that deep-links into monument content.

pub mod app;
pub mod application;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
