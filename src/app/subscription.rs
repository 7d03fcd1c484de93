// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard events are routed to whichever surface has input: the
//! modal while it is open, the grid otherwise.

use super::Message;
use crate::ui::{gallery_grid, gallery_modal};
use iced::{event, Subscription};

/// Creates the event subscription for the current surface.
///
/// Only events no widget captured are forwarded, so key presses consumed by
/// focused widgets never reach the handlers twice.
pub fn create_event_subscription(modal_open: bool) -> Subscription<Message> {
    if modal_open {
        event::listen_with(|event, status, _window_id| match (&event, status) {
            (event::Event::Keyboard(..), event::Status::Ignored) => Some(Message::Modal(
                gallery_modal::Message::RawEvent(event.clone()),
            )),
            _ => None,
        })
    } else {
        event::listen_with(|event, status, _window_id| match (&event, status) {
            (event::Event::Keyboard(..), event::Status::Ignored) => {
                Some(Message::Grid(gallery_grid::Message::RawEvent(event.clone())))
            }
            _ => None,
        })
    }
}
