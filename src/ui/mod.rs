// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a state type, a `Message`, an `Effect` returned from its handler
//! and a `view`.
//!
//! - [`gallery_grid`] - The gallery page and its keyboard focus
//! - [`gallery_modal`] - The lightbox opened from the page
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_grid;
pub mod gallery_modal;
pub mod styles;
pub mod theming;
