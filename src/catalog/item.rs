// SPDX-License-Identifier: MPL-2.0
//! Gallery item types and lenient field decoding.
//!
//! Items come from hand-edited catalog files, so nothing in here fails: a
//! field with the wrong type or a malformed image list decodes to its
//! default instead.

use std::path::Path;

/// The single image shown for an item when it has no image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub src: String,
    pub alt: String,
}

/// One displayable entry of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    /// Ordered image sources; may be empty.
    pub images: Vec<String>,
    pub fallback: Option<InlineImage>,
}

impl GalleryItem {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.fallback = Some(InlineImage {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }

    /// The image set a viewer should present: the image list, or the inline
    /// image alone when the list is empty.
    #[must_use]
    pub fn display_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        self.fallback
            .iter()
            .map(|inline| inline.src.clone())
            .collect()
    }

    /// Source used for the item's card on the gallery page.
    #[must_use]
    pub fn preview_src(&self) -> Option<&str> {
        self.fallback
            .as_ref()
            .map(|inline| inline.src.as_str())
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// Alt text of the main image: the inline image's alt, else the title.
    #[must_use]
    pub fn main_alt(&self) -> &str {
        match &self.fallback {
            Some(inline) if !inline.alt.is_empty() => &inline.alt,
            _ => &self.title,
        }
    }
}

/// Decodes a text field, accepting numbers and booleans as their literal text.
/// Strings are kept exactly as written.
pub(crate) fn text_field(value: Option<&toml::Value>) -> String {
    match value {
        Some(toml::Value::String(s)) => s.clone(),
        Some(toml::Value::Integer(i)) => i.to_string(),
        Some(toml::Value::Float(f)) => f.to_string(),
        Some(toml::Value::Boolean(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Decodes an image list given either as a TOML array or as a JSON-encoded
/// string. Non-string entries and blank entries are dropped.
pub(crate) fn image_list(value: Option<&toml::Value>) -> Vec<String> {
    match value {
        Some(toml::Value::Array(entries)) => entries
            .iter()
            .filter_map(toml::Value::as_str)
            .filter_map(non_blank)
            .collect(),
        Some(toml::Value::String(encoded)) => decode_json_list(encoded),
        _ => Vec::new(),
    }
}

fn decode_json_list(encoded: &str) -> Vec<String> {
    if encoded.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<serde_json::Value>>(encoded) {
        Ok(entries) => entries
            .iter()
            .filter_map(serde_json::Value::as_str)
            .filter_map(non_blank)
            .collect(),
        Err(err) => {
            tracing::debug!(%err, "malformed image list, using inline image");
            Vec::new()
        }
    }
}

fn non_blank(src: &str) -> Option<String> {
    let trimmed = src.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Resolves an image source against the catalog directory.
///
/// URLs and absolute paths are returned unchanged.
pub(crate) fn resolve_source(base_dir: Option<&Path>, src: &str) -> String {
    if src.contains("://") || Path::new(src).is_absolute() {
        return src.to_string();
    }
    match base_dir {
        Some(dir) => dir.join(src).to_string_lossy().into_owned(),
        None => src.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(toml_src: &str) -> toml::Value {
        let table: toml::Table = toml::from_str(toml_src).expect("valid toml");
        table.get("v").cloned().expect("key v")
    }

    #[test]
    fn array_and_json_string_decode_identically() {
        let array = value(r#"v = ["a.jpg", "b.jpg"]"#);
        let json = value(r#"v = '["a.jpg", "b.jpg"]'"#);
        assert_eq!(image_list(Some(&array)), image_list(Some(&json)));
        assert_eq!(image_list(Some(&array)), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        let broken = value(r#"v = '["a.jpg", '"#);
        assert!(image_list(Some(&broken)).is_empty());
    }

    #[test]
    fn non_string_entries_are_dropped() {
        let mixed = value(r#"v = '["a.jpg", 3, null, "  ", "b.jpg"]'"#);
        assert_eq!(image_list(Some(&mixed)), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn wrong_type_degrades_to_empty() {
        let number = value("v = 12");
        assert!(image_list(Some(&number)).is_empty());
        assert!(image_list(None).is_empty());
    }

    #[test]
    fn text_field_accepts_numbers() {
        assert_eq!(text_field(Some(&value("v = 2024"))), "2024");
        assert_eq!(text_field(None), "");
    }

    #[test]
    fn text_field_keeps_surrounding_whitespace() {
        assert_eq!(text_field(Some(&value("v = '  Vase  '"))), "  Vase  ");
    }

    #[test]
    fn display_images_prefers_list_over_inline() {
        let item = GalleryItem::new("Vase", "")
            .with_images(["a.jpg", "b.jpg"])
            .with_fallback("cover.jpg", "Vase cover");
        assert_eq!(item.display_images(), vec!["a.jpg", "b.jpg"]);
        assert_eq!(item.preview_src(), Some("cover.jpg"));
    }

    #[test]
    fn display_images_falls_back_to_inline() {
        let item = GalleryItem::new("Vase", "").with_fallback("cover.jpg", "");
        assert_eq!(item.display_images(), vec!["cover.jpg"]);
        assert_eq!(item.main_alt(), "Vase");
    }

    #[test]
    fn item_without_any_image_has_empty_display_set() {
        let item = GalleryItem::new("Bare", "");
        assert!(item.display_images().is_empty());
        assert!(item.preview_src().is_none());
    }

    #[test]
    fn resolve_source_joins_relative_paths_only() {
        let base = Path::new("/srv/gallery");
        assert_eq!(
            resolve_source(Some(base), "img/a.jpg"),
            Path::new("/srv/gallery/img/a.jpg").to_string_lossy()
        );
        assert_eq!(
            resolve_source(Some(base), "https://example.org/a.jpg"),
            "https://example.org/a.jpg"
        );
        assert_eq!(resolve_source(None, "a.jpg"), "a.jpg");
    }
}
