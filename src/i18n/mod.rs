// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the gallery page and the lightbox.
//!
//! Translations are Fluent `.ftl` files embedded at build time; a directory
//! passed with `--i18n-dir` replaces them per locale. The locale is chosen
//! once at startup from the CLI, then the settings file, then the OS, and
//! falls back to `en-US`.

pub mod fluent;
