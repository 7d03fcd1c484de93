// SPDX-License-Identifier: MPL-2.0
//! Lightbox component: message handling and rendering of the open item.

use super::state::{Direction, ModalState, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, center, container, mouse_area, opaque, scrollable, tooltip, Column, Row, Space,
    Stack, Text,
};
use iced::{event, keyboard, ContentFit, Element, Length, Theme};

/// Messages handled by the gallery modal.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    PreviousPressed,
    NextPressed,
    ClosePressed,
    BackdropPressed,
    /// Native event forwarded while the modal is open.
    RawEvent(event::Event),
}

/// Effects propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ImageChanged(usize),
    Closed,
}

/// Settings that affect how the modal reacts to input.
#[derive(Debug, Clone, Copy)]
pub struct Behavior {
    pub close_on_backdrop: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            close_on_backdrop: crate::config::DEFAULT_CLOSE_ON_BACKDROP,
        }
    }
}

impl ModalState {
    /// Applies `message` to the modal. Messages arriving while the modal is
    /// closed are ignored.
    pub fn handle(&mut self, message: Message, behavior: Behavior) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }

        match message {
            Message::ThumbnailPressed(index) => {
                self.set_image(index);
                Effect::ImageChanged(self.current_index())
            }
            Message::PreviousPressed => self.step(Direction::Previous),
            Message::NextPressed => self.step(Direction::Next),
            Message::ClosePressed => self.close_with_effect(),
            Message::BackdropPressed => {
                if behavior.close_on_backdrop {
                    self.close_with_effect()
                } else {
                    Effect::None
                }
            }
            Message::RawEvent(event) => self.handle_raw_event(&event),
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return Effect::None;
        };

        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => self.close_with_effect(),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => self.step(Direction::Next),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                self.step(Direction::Previous)
            }
            _ => Effect::None,
        }
    }

    fn step(&mut self, direction: Direction) -> Effect {
        if self.image_count() == 0 {
            return Effect::None;
        }
        self.advance(direction);
        Effect::ImageChanged(self.current_index())
    }

    fn close_with_effect(&mut self) -> Effect {
        self.close();
        Effect::Closed
    }
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnail_size: f32,
}

/// Layers the modal above `base`. Returns `base` untouched while closed.
pub fn overlay<'a, M: Clone + 'a>(
    state: &'a ModalState,
    base: Element<'a, M>,
    ctx: ViewContext<'a>,
    map: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    if !state.is_open() {
        return base;
    }

    let card = container(view(state, ctx))
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::modal_card);

    let backdrop = mouse_area(
        center(opaque(card))
            .padding(spacing::XL)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let layer: Element<'a, Message> = opaque(backdrop);
    Stack::new().push(base).push(layer.map(map)).into()
}

/// Renders the modal card content.
pub fn view<'a>(state: &'a ModalState, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(state.title())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(button(Text::new(i18n.tr("modal-close-button"))).on_press(Message::ClosePressed));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(main_image(state, i18n));

    if state.image_count() > 1 {
        content = content.push(navigation_row(state, i18n));
    }

    if !state.description().is_empty() {
        content = content.push(Text::new(state.description()).size(typography::BODY));
    }

    let thumbnails = state.thumbnails();
    if !thumbnails.is_empty() {
        content = content.push(thumbnail_strip(state, thumbnails, &ctx));
    }

    content.into()
}

fn main_image<'a>(state: &'a ModalState, i18n: &'a I18n) -> Element<'a, Message> {
    let src = state.main_image_src();
    let body: Element<'a, Message> = if src.is_empty() {
        Text::new(i18n.tr("modal-no-image")).into()
    } else {
        let image = Image::new(Handle::from_path(src))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);
        styles::tooltip::styled(image, state.main_alt(), tooltip::Position::Bottom).into()
    };

    center(body)
        .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
        .into()
}

fn navigation_row<'a>(state: &'a ModalState, i18n: &'a I18n) -> Element<'a, Message> {
    let position = i18n.tr_with_args(
        "modal-position",
        &[
            ("current", FluentValue::from(state.current_index() + 1)),
            ("total", FluentValue::from(state.image_count())),
        ],
    );

    Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("modal-previous-button")))
                .on_press(Message::PreviousPressed),
        )
        .push(Space::new().width(Length::Fill))
        .push(Text::new(position).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(button(Text::new(i18n.tr("modal-next-button"))).on_press(Message::NextPressed))
        .into()
}

fn thumbnail_strip<'a>(
    state: &'a ModalState,
    thumbnails: Vec<Thumbnail<'a>>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let size = ctx.thumbnail_size;
    let row = thumbnails.into_iter().fold(
        Row::new().spacing(spacing::XS).padding(spacing::XXS),
        |row, thumb| {
            let alt = thumbnail_alt(ctx.i18n, state.title(), thumb.index);
            let image = Image::new(Handle::from_path(thumb.src))
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size));
            let style: fn(&Theme, button::Status) -> button::Style = if thumb.active {
                styles::button::thumbnail_active
            } else {
                styles::button::thumbnail
            };
            let control = button(image)
                .padding(spacing::XXS)
                .on_press(Message::ThumbnailPressed(thumb.index))
                .style(style);
            row.push(styles::tooltip::styled(
                control,
                alt,
                tooltip::Position::Top,
            ))
        },
    );

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill)
        .into()
}

/// Accessible label of the thumbnail at `index` (1-based in the text).
pub fn thumbnail_alt(i18n: &I18n, title: &str, index: usize) -> String {
    i18n.tr_with_args(
        "modal-thumbnail-alt",
        &[
            ("title", FluentValue::from(title)),
            ("number", FluentValue::from(index + 1)),
        ],
    )
}
