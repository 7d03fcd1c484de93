// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery grid is always rendered; the modal is layered above it while
//! open.

use super::Message;
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery_grid::{self, ViewContext as GridViewContext};
use crate::ui::gallery_modal::{self, ModalState, ViewContext as ModalViewContext};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: Option<&'a Catalog>,
    pub load_error: Option<&'a CatalogError>,
    pub grid: &'a gallery_grid::State,
    pub modal: &'a ModalState,
    pub columns: u16,
    pub thumbnail_size: u16,
    /// i18n key of a warning raised while loading settings.
    pub config_warning: Option<&'a str>,
}

/// Renders the gallery page with the modal on top when it is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid_view = gallery_grid::view(
        ctx.grid,
        GridViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            load_error: ctx.load_error,
            columns: ctx.columns,
        },
    )
    .map(Message::Grid);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.config_warning {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .padding(spacing::XS)
                .width(Length::Fill),
        );
    }
    column = column.push(
        Container::new(grid_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    gallery_modal::overlay(
        ctx.modal,
        column.into(),
        ModalViewContext {
            i18n: ctx.i18n,
            thumbnail_size: f32::from(ctx.thumbnail_size),
        },
        Message::Modal,
    )
}
