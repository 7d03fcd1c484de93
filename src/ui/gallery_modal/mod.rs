// SPDX-License-Identifier: MPL-2.0
//! Lightbox modal presenting one gallery item's image set.
//!
//! The modal has two states, closed and open:
//!
//! ```text
//!  Closed ──open(item)──▶ Open ──thumbnail / ←/→──▶ Open
//!    ▲                      │
//!    └──── Esc / close ─────┘
//! ```
//!
//! [`ModalState`] owns the selection logic; [`component`] maps input to it
//! and renders the overlay.

pub mod component;
pub mod state;

pub use component::{overlay, Behavior, Effect, Message, ViewContext};
pub use state::{Direction, ModalState, Thumbnail};
