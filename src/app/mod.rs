// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery grid and the
//! modal.
//!
//! The `App` struct wires together the catalog, localization and settings,
//! and translates component effects into side effects such as catalog loading
//! or config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::error::CatalogError;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_grid;
use crate::ui::gallery_modal::ModalState;
use fluent_bundle::FluentValue;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Default)]
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// i18n key of a warning raised while loading settings.
    config_warning: Option<String>,
    catalog: Option<Catalog>,
    load_error: Option<CatalogError>,
    grid: gallery_grid::State,
    modal: ModalState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.catalog.as_ref().map_or(0, Catalog::len))
            .field("modal_open", &self.modal.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off loading of the catalog
    /// named on the command line, or the last one opened.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let startup_catalog = startup_catalog(flags.catalog_path, &config);

        let app = App {
            i18n,
            config,
            config_warning,
            ..Self::default()
        };

        let task = match startup_catalog {
            Some(path) => update::load_catalog(path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.modal.is_open() && !self.modal.title().is_empty() {
            return self.i18n.tr_with_args(
                "window-title-with-item",
                &[
                    ("item", FluentValue::from(self.modal.title())),
                    ("app", FluentValue::from(app_name.as_str())),
                ],
            );
        }

        match self.catalog.as_ref().and_then(Catalog::title) {
            Some(title) => self.i18n.tr_with_args(
                "window-title-with-item",
                &[
                    ("item", FluentValue::from(title)),
                    ("app", FluentValue::from(app_name.as_str())),
                ],
            ),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.modal.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            config_warning: self.config_warning.as_deref(),
            catalog: &mut self.catalog,
            load_error: &mut self.load_error,
            grid: &mut self.grid,
            modal: &mut self.modal,
        };

        match message {
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Modal(modal_message) => {
                update::handle_modal_message(&mut ctx, modal_message)
            }
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::CatalogDialogResult(path) => update::handle_catalog_dialog_result(path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: self.catalog.as_ref(),
            load_error: self.load_error.as_ref(),
            grid: &self.grid,
            modal: &self.modal,
            columns: self.config.gallery.columns(),
            thumbnail_size: self.config.gallery.thumbnail_size(),
            config_warning: self.config_warning.as_deref(),
        })
    }
}

/// Picks the catalog to open at startup: the CLI argument wins, otherwise the
/// last catalog is reopened if it still exists.
fn startup_catalog(cli_path: Option<String>, config: &Config) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(PathBuf::from(path));
    }

    config
        .gallery
        .last_catalog
        .clone()
        .filter(|path| path.exists())
}
