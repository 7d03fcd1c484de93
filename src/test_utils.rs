// SPDX-License-Identifier: MPL-2.0
//! Test helpers for building native input events.

use iced::event;
use iced::keyboard::{self, key::Code, key::Named, key::Physical, Key, Location, Modifiers};

/// A `KeyPressed` event for a named key.
pub fn key_pressed(named: Named) -> event::Event {
    key_pressed_with(named, Modifiers::default())
}

/// A `KeyPressed` event for a named key with modifiers held.
pub fn key_pressed_with(named: Named, modifiers: Modifiers) -> event::Event {
    let code = match named {
        Named::Enter => Code::Enter,
        Named::Escape => Code::Escape,
        Named::Tab => Code::Tab,
        Named::ArrowLeft => Code::ArrowLeft,
        Named::ArrowRight => Code::ArrowRight,
        Named::ArrowUp => Code::ArrowUp,
        Named::ArrowDown => Code::ArrowDown,
        _ => Code::Space,
    };

    event::Event::Keyboard(keyboard::Event::KeyPressed {
        key: Key::Named(named),
        modified_key: Key::Named(named),
        physical_key: Physical::Code(code),
        location: Location::Standard,
        modifiers,
        text: None,
        repeat: false,
    })
}
