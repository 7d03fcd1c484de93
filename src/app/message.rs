// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::ui::{gallery_grid, gallery_modal};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(gallery_grid::Message),
    Modal(gallery_modal::Message),
    /// Result of reading a catalog file on the async runtime.
    CatalogLoaded(Result<Catalog, Error>),
    /// Result from the open catalog dialog.
    CatalogDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Catalog to open at startup. Falls back to the last opened catalog.
    pub catalog_path: Option<String>,
    /// Directory containing additional `.ftl` translation files.
    pub i18n_dir: Option<String>,
    /// Overrides where settings are read from and written to.
    pub config_dir: Option<String>,
}
