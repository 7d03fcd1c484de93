// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog loading.
//!
//! A catalog is a TOML file describing the pieces shown on the gallery page:
//!
//! ```toml
//! [gallery]
//! title = "Stoneware 2024"
//!
//! [[items]]
//! title = "Celadon bowl"
//! description = "Wheel-thrown, reduction fired."
//! images = ["bowl/front.jpg", "bowl/side.jpg"]
//! image = "bowl/cover.jpg"
//! alt = "Celadon bowl on a linen cloth"
//!
//! [[items]]
//! title = "Tea bowl"
//! images = '["tea/1.jpg", "tea/2.jpg"]'   # JSON-encoded lists are accepted too
//! ```
//!
//! Only the overall structure can fail to load. Item fields are decoded
//! leniently (see [`item`]). Titles, descriptions and alt text are shown
//! exactly as written; only image sources are trimmed.

pub mod item;

pub use item::{GalleryItem, InlineImage};

use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File extension offered by the open dialog.
pub const CATALOG_EXTENSION: &str = "toml";

#[derive(Debug, Deserialize, Default)]
struct RawCatalog {
    #[serde(default)]
    gallery: RawHeader,
    #[serde(default)]
    items: Vec<toml::Table>,
}

#[derive(Debug, Deserialize, Default)]
struct RawHeader {
    #[serde(default)]
    title: Option<toml::Value>,
}

/// An ordered, immutable list of gallery items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    title: Option<String>,
    source: Option<PathBuf>,
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Builds a catalog from already decoded items.
    #[must_use]
    pub fn from_items(title: Option<String>, items: Vec<GalleryItem>) -> Self {
        Self {
            title,
            source: None,
            items,
        }
    }

    /// Parses catalog text. Relative image paths are resolved against
    /// `base_dir` when given.
    pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)
            .map_err(|err| CatalogError::InvalidStructure(err.message().to_string()))?;

        let title = Some(item::text_field(raw.gallery.title.as_ref())).filter(|t| !t.trim().is_empty());
        let items = raw
            .items
            .iter()
            .map(|table| decode_item(table, base_dir))
            .collect();

        Ok(Self {
            title,
            source: None,
            items,
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Path the catalog was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records the file the catalog was read from.
    #[must_use]
    pub fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }
}

fn decode_item(table: &toml::Table, base_dir: Option<&Path>) -> GalleryItem {
    let title = item::text_field(table.get("title"));
    let description = item::text_field(table.get("description").or_else(|| table.get("desc")));
    let images = item::image_list(table.get("images"))
        .iter()
        .map(|src| item::resolve_source(base_dir, src))
        .collect();

    let inline_src = item::text_field(table.get("image")).trim().to_string();
    let fallback = (!inline_src.is_empty()).then(|| InlineImage {
        src: item::resolve_source(base_dir, &inline_src),
        alt: item::text_field(table.get("alt")),
    });

    GalleryItem {
        title,
        description,
        images,
        fallback,
    }
}

/// Loads a catalog synchronously.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| CatalogError::Unreadable(format!("{}: {}", path.display(), err)))?;
    Ok(Catalog::parse(&content, path.parent())?.with_source(path))
}

/// Loads a catalog on the async runtime; used by the application at startup
/// and after the open dialog.
pub async fn load(path: PathBuf) -> Result<Catalog> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| CatalogError::Unreadable(format!("{}: {}", path.display(), err)))?;
    let catalog = Catalog::parse(&content, path.parent())?.with_source(&path);
    tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
    Ok(catalog)
}
