//! HID keyboard report types and the key state they are built from.

pub mod key_state;
pub mod keyboard;

#[cfg(test)]
mod tests;

pub use key_state::KeyStates;
pub use keyboard::{encode_modifiers, KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR};
