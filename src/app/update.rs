// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application it may touch, applies the component `Effect` and returns the
//! follow-up task.

use super::{persistence, Message};
use crate::catalog::{self, Catalog, CATALOG_EXTENSION};
use crate::config::Config;
use crate::error::{CatalogError, Error};
use crate::i18n::fluent::I18n;
use crate::ui::{gallery_grid, gallery_modal};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    /// i18n key of a warning raised while loading settings.
    pub config_warning: Option<&'a str>,
    pub catalog: &'a mut Option<Catalog>,
    pub load_error: &'a mut Option<CatalogError>,
    pub grid: &'a mut gallery_grid::State,
    pub modal: &'a mut gallery_modal::ModalState,
}

/// Handles messages from the gallery grid.
pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_grid::Message,
) -> Task<Message> {
    let item_count = ctx.catalog.as_ref().map_or(0, Catalog::len);

    match ctx.grid.handle(message, item_count) {
        gallery_grid::Effect::None => Task::none(),
        gallery_grid::Effect::OpenItem(index) => {
            open_item(ctx, index);
            Task::none()
        }
        gallery_grid::Effect::OpenCatalogDialog => {
            handle_open_catalog_dialog(ctx.i18n.tr("catalog-dialog-filter"), last_directory(ctx))
        }
    }
}

/// Opens the modal on the catalog item at `index`.
fn open_item(ctx: &mut UpdateContext<'_>, index: usize) {
    let Some(item) = ctx.catalog.as_ref().and_then(|catalog| catalog.item(index)) else {
        tracing::warn!(index, "ignoring open request for unknown item");
        return;
    };

    ctx.modal.open(item);
    tracing::debug!(
        index,
        title = %item.title,
        images = ctx.modal.image_count(),
        "modal opened"
    );
}

/// Handles messages from the modal.
pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_modal::Message,
) -> Task<Message> {
    let behavior = gallery_modal::Behavior {
        close_on_backdrop: ctx.config.gallery.close_on_backdrop(),
    };

    match ctx.modal.handle(message, behavior) {
        gallery_modal::Effect::None => {}
        gallery_modal::Effect::ImageChanged(index) => {
            tracing::trace!(index, "modal image changed");
        }
        gallery_modal::Effect::Closed => {
            tracing::debug!("modal closed");
        }
    }

    Task::none()
}

/// Starts reading the catalog at `path` on the async runtime.
pub fn load_catalog(path: PathBuf) -> Task<Message> {
    tracing::debug!(path = %path.display(), "loading catalog");
    Task::perform(catalog::load(path), Message::CatalogLoaded)
}

/// Applies a finished catalog load.
///
/// A new catalog closes the modal and resets grid focus, since indices into
/// the previous catalog no longer mean anything.
pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Catalog, Error>,
) -> Task<Message> {
    match result {
        Ok(loaded) => {
            if let Some(source) = loaded.source() {
                persistence::remember_catalog(ctx.config, source, ctx.config_warning);
            }
            *ctx.catalog = Some(loaded);
            *ctx.load_error = None;
        }
        Err(error) => {
            tracing::warn!(%error, "failed to load catalog");
            *ctx.catalog = None;
            *ctx.load_error = Some(match error {
                Error::Catalog(catalog_error) => catalog_error,
                other => CatalogError::Unreadable(other.to_string()),
            });
        }
    }

    ctx.modal.close();
    ctx.grid.reset();
    Task::none()
}

/// Opens the catalog picker, starting in `last_directory` when it still exists.
pub fn handle_open_catalog_dialog(
    filter_name: String,
    last_directory: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter(filter_name, &[CATALOG_EXTENSION]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::CatalogDialogResult,
    )
}

/// Handles the result of the open catalog dialog.
pub fn handle_catalog_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => load_catalog(path),
        None => Task::none(),
    }
}

fn last_directory(ctx: &UpdateContext<'_>) -> Option<PathBuf> {
    ctx.catalog
        .as_ref()
        .and_then(Catalog::source)
        .or(ctx.config.gallery.last_catalog.as_deref())
        .and_then(|path| path.parent())
        .map(PathBuf::from)
}
