// SPDX-License-Identifier: MPL-2.0
//! Lightbox state: the image set of the open item and the selected image.

use crate::catalog::GalleryItem;

/// Navigation direction inside the open image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// One entry of the thumbnail strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub src: &'a str,
    pub active: bool,
}

/// State of the gallery modal.
///
/// `images` and `current_index` are only meaningful while the modal is open.
/// [`ModalState::close`] leaves them in place and [`ModalState::open`]
/// overwrites them, so stale values are never observable.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    images: Vec<String>,
    current_index: usize,
    is_open: bool,
    title: String,
    description: String,
    main_alt: String,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `item`: its image list (or its inline image when the list is
    /// empty), with the first image selected.
    pub fn open(&mut self, item: &GalleryItem) {
        self.images = item.display_images();
        self.current_index = 0;
        self.title.clone_from(&item.title);
        self.description.clone_from(&item.description);
        self.main_alt = item.main_alt().to_string();
        self.is_open = true;
        tracing::debug!(
            title = %self.title,
            images = self.images.len(),
            "gallery modal opened"
        );
    }

    /// Selects the image at `index`.
    ///
    /// Callers only pass indices of the current image set; anything else is
    /// ignored.
    pub fn set_image(&mut self, index: usize) {
        if index >= self.images.len() {
            tracing::debug!(index, len = self.images.len(), "ignoring out-of-range image");
            return;
        }
        self.current_index = index;
    }

    pub fn close(&mut self) {
        if self.is_open {
            tracing::debug!(title = %self.title, "gallery modal closed");
        }
        self.is_open = false;
    }

    /// Moves the selection one step, wrapping around both ends.
    /// Does nothing for an empty image set.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        let next = (self.current_index as isize + direction.offset() + len).rem_euclid(len);
        self.set_image(next as usize);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Page scrolling is suspended exactly while the modal is shown.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn main_alt(&self) -> &str {
        &self.main_alt
    }

    /// Source of the main image, empty when the set is empty.
    #[must_use]
    pub fn main_image_src(&self) -> &str {
        self.images
            .get(self.current_index)
            .map_or("", String::as_str)
    }

    /// The thumbnail strip, with the selected image marked active.
    #[must_use]
    pub fn thumbnails(&self) -> Vec<Thumbnail<'_>> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, src)| Thumbnail {
                index,
                src,
                active: index == self.current_index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pot(title: &str, count: usize) -> GalleryItem {
        GalleryItem::new(title, format!("{title} description"))
            .with_images((0..count).map(|i| format!("{title}-{i}.jpg")))
    }

    fn active_indices(state: &ModalState) -> Vec<usize> {
        state
            .thumbnails()
            .iter()
            .filter(|thumb| thumb.active)
            .map(|thumb| thumb.index)
            .collect()
    }

    #[test]
    fn new_state_is_closed_and_empty() {
        let state = ModalState::new();
        assert!(!state.is_open());
        assert!(!state.is_scroll_locked());
        assert_eq!(state.main_image_src(), "");
        assert!(state.thumbnails().is_empty());
    }

    #[test]
    fn open_with_three_images_builds_three_thumbnails() {
        let mut state = ModalState::new();
        state.open(&pot("vase", 3));

        assert!(state.is_open());
        assert!(state.is_scroll_locked());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.thumbnails().len(), 3);
        assert_eq!(active_indices(&state), vec![0]);
        assert_eq!(state.main_image_src(), "vase-0.jpg");
        assert_eq!(state.title(), "vase");
        assert_eq!(state.description(), "vase description");
    }

    #[test]
    fn set_image_marks_exactly_one_thumbnail() {
        let mut state = ModalState::new();
        state.open(&pot("jar", 5));

        for i in 0..5 {
            state.set_image(i);
            assert_eq!(active_indices(&state), vec![i]);
            assert_eq!(state.main_image_src(), format!("jar-{i}.jpg"));
        }
    }

    #[test]
    fn set_image_out_of_range_is_ignored() {
        let mut state = ModalState::new();
        state.open(&pot("jar", 2));
        state.set_image(1);
        state.set_image(9);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn advancing_n_times_returns_to_start() {
        for n in 1..=6 {
            let mut state = ModalState::new();
            state.open(&pot("cup", n));
            let start = n / 2;
            state.set_image(start);

            for _ in 0..n {
                state.advance(Direction::Next);
            }
            assert_eq!(state.current_index(), start, "n = {n}");
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = ModalState::new();
        state.open(&pot("plate", 4));
        state.advance(Direction::Previous);
        assert_eq!(state.current_index(), 3);
        assert_eq!(active_indices(&state), vec![3]);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut state = ModalState::new();
        state.open(&pot("plate", 4));
        state.set_image(3);
        state.advance(Direction::Next);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn advance_on_empty_set_is_noop() {
        let mut state = ModalState::new();
        state.open(&GalleryItem::new("empty", ""));
        state.advance(Direction::Next);
        state.advance(Direction::Previous);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.main_image_src(), "");
    }

    #[test]
    fn open_without_any_image_is_empty_but_open() {
        let mut state = ModalState::new();
        state.open(&GalleryItem::new("bare", ""));

        assert!(state.is_open());
        assert_eq!(state.main_image_src(), "");
        assert!(state.thumbnails().is_empty());
        assert_eq!(state.main_alt(), "bare");
    }

    #[test]
    fn open_with_only_inline_image_shows_it() {
        let mut state = ModalState::new();
        state.open(&GalleryItem::new("mug", "").with_fallback("mug.jpg", "A mug"));

        assert_eq!(state.main_image_src(), "mug.jpg");
        assert_eq!(state.thumbnails().len(), 1);
        assert_eq!(state.main_alt(), "A mug");
    }

    #[test]
    fn close_keeps_stale_selection() {
        let mut state = ModalState::new();
        state.open(&pot("bowl", 3));
        state.set_image(2);
        state.close();

        assert!(!state.is_open());
        assert!(!state.is_scroll_locked());
        assert_eq!(state.image_count(), 3);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn reopen_does_not_leak_previous_item() {
        let mut state = ModalState::new();
        state.open(&pot("bowl", 5));
        state.set_image(4);
        state.close();

        let teapot = GalleryItem::new("teapot", "").with_images(["lid.jpg", "spout.jpg"]);
        state.open(&teapot);

        assert_eq!(state.title(), "teapot");
        assert_eq!(state.description(), "");
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.images(), ["lid.jpg", "spout.jpg"]);
        assert_eq!(active_indices(&state), vec![0]);
    }

    #[test]
    fn close_when_already_closed_is_harmless() {
        let mut state = ModalState::new();
        state.close();
        assert!(!state.is_open());
    }
}
