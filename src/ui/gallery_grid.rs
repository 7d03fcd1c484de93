// SPDX-License-Identifier: MPL-2.0
//! Gallery page: the grid of items the modal is opened from.
//!
//! Items are activated with a click, or with Enter once keyboard focus has
//! been moved onto them with Tab / Shift+Tab.

use crate::catalog::{Catalog, GalleryItem};
use crate::config::GRID_CARD_IMAGE_SIZE;
use crate::error::CatalogError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, center, scrollable, Column, Row, Space, Text};
use iced::{event, keyboard, ContentFit, Element, Length, Theme};

/// Keyboard focus of the grid.
#[derive(Debug, Clone, Default)]
pub struct State {
    focused: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ItemPressed(usize),
    OpenCatalogPressed,
    /// Native event forwarded while the modal is closed.
    RawEvent(event::Event),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenItem(usize),
    OpenCatalogDialog,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Drops the focus, e.g. when a different catalog is loaded.
    pub fn reset(&mut self) {
        self.focused = None;
    }

    pub fn handle(&mut self, message: Message, item_count: usize) -> Effect {
        match message {
            Message::ItemPressed(index) if index < item_count => {
                self.focused = Some(index);
                Effect::OpenItem(index)
            }
            Message::ItemPressed(_) => Effect::None,
            Message::OpenCatalogPressed => Effect::OpenCatalogDialog,
            Message::RawEvent(event) => self.handle_raw_event(&event, item_count),
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event, item_count: usize) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return Effect::None;
        };

        match key {
            keyboard::Key::Named(keyboard::key::Named::Tab) => {
                if modifiers.shift() {
                    self.focus_previous(item_count);
                } else {
                    self.focus_next(item_count);
                }
                Effect::None
            }
            keyboard::Key::Named(keyboard::key::Named::Enter) => match self.focused {
                Some(index) if index < item_count => Effect::OpenItem(index),
                _ => Effect::None,
            },
            _ => Effect::None,
        }
    }

    /// Moves focus to the next item, wrapping to the first.
    pub fn focus_next(&mut self, item_count: usize) {
        if item_count == 0 {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            Some(index) if index + 1 < item_count => index + 1,
            _ => 0,
        });
    }

    /// Moves focus to the previous item, wrapping to the last.
    pub fn focus_previous(&mut self, item_count: usize) {
        if item_count == 0 {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            Some(index) if index > 0 && index < item_count => index - 1,
            _ => item_count - 1,
        });
    }
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: Option<&'a Catalog>,
    pub load_error: Option<&'a CatalogError>,
    pub columns: u16,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if let Some(error) = ctx.load_error {
        return error_state(ctx.i18n, error);
    }

    match ctx.catalog {
        Some(catalog) if !catalog.is_empty() => grid(state, catalog, &ctx),
        _ => empty_state(ctx.i18n),
    }
}

fn grid<'a>(state: &'a State, catalog: &'a Catalog, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = usize::from(ctx.columns.max(1));

    let mut header = Row::new().spacing(spacing::SM);
    if let Some(title) = catalog.title() {
        header = header.push(Text::new(title).size(typography::TITLE_LG));
    }
    let count = ctx
        .i18n
        .tr_with_args("grid-item-count", &[("count", FluentValue::from(catalog.len()))]);
    header = header
        .push(Space::new().width(Length::Fill))
        .push(Text::new(count).size(typography::CAPTION));

    let rows = catalog
        .items()
        .chunks(columns)
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |column, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(spacing::MD),
                |row, (offset, item)| {
                    let index = row_index * columns + offset;
                    row.push(card(ctx.i18n, item, index, state.focused == Some(index)))
                },
            );
            column.push(row)
        });

    let body = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(rows);

    scrollable(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card<'a>(
    i18n: &I18n,
    item: &'a GalleryItem,
    index: usize,
    focused: bool,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match item.preview_src() {
        Some(src) => Image::new(Handle::from_path(src))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(GRID_CARD_IMAGE_SIZE))
            .height(Length::Fixed(GRID_CARD_IMAGE_SIZE))
            .into(),
        None => center(Text::new(item.main_alt().to_string()))
            .width(Length::Fixed(GRID_CARD_IMAGE_SIZE))
            .height(Length::Fixed(GRID_CARD_IMAGE_SIZE))
            .into(),
    };

    let label = if item.title.is_empty() {
        i18n.tr("grid-untitled-item")
    } else {
        item.title.clone()
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(preview)
        .push(Text::new(label).size(typography::BODY));

    let style: fn(&Theme, button::Status) -> button::Style = if focused {
        styles::button::card_focused
    } else {
        styles::button::card
    };

    button(content)
        .padding(spacing::XS)
        .on_press(Message::ItemPressed(index))
        .style(style)
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("grid-empty-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("grid-empty-hint")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("grid-open-catalog-button")))
                .on_press(Message::OpenCatalogPressed)
                .style(styles::button::primary),
        );

    center(content).into()
}

fn error_state<'a>(i18n: &'a I18n, error: &'a CatalogError) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(520.0)
        .push(Text::new(i18n.tr("error-catalog-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY))
        .push(Text::new(error.detail()).size(typography::CAPTION))
        .push(
            button(Text::new(i18n.tr("grid-open-catalog-button")))
                .on_press(Message::OpenCatalogPressed)
                .style(styles::button::primary),
        );

    center(content).into()
}
