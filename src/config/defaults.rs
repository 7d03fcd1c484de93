// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Column count of the gallery page
//! - **Thumbnails**: Size of the thumbnail strip inside the modal
//! - **Modal**: Dismiss behavior of the lightbox

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of item columns on the gallery page.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of columns.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of columns.
pub const MAX_GRID_COLUMNS: u16 = 8;

/// Edge length of an item card preview in the grid (pixels).
pub const GRID_CARD_IMAGE_SIZE: f32 = 220.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default edge length of a thumbnail in the modal strip (pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u16 = 72;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u16 = 48;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u16 = 160;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Whether clicking the darkened backdrop closes the modal.
pub const DEFAULT_CLOSE_ON_BACKDROP: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults_are_valid() {
        assert_eq!(DEFAULT_GRID_COLUMNS, 3);
        assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
        assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    }

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert_eq!(DEFAULT_THUMBNAIL_SIZE, 72);
        assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }
}
