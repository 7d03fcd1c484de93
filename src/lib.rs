// SPDX-License-Identifier: MPL-2.0
//! `kiln_gallery` is a desktop gallery for ceramic pieces built with the Iced
//! GUI framework.
//!
//! A catalog file lists the pieces; clicking one opens a lightbox modal with
//! its image set, thumbnails, and keyboard navigation. Strings are localized
//! with Fluent and preferences persist in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/kiln_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
