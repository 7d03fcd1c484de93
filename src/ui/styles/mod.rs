// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery page and the lightbox.

pub mod button;
pub mod container;
pub mod overlay;
pub mod tooltip;
