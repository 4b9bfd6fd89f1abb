//! USB HID keyboard emulation over Android Open Accessory.
//!
//! Key events from the host's input source are translated into 8-byte
//! boot-protocol keyboard reports and pushed to the attached device through
//! an [`aoa::Accessory`] transport:
//!
//! ```text
//! KeyEvent ─► HidKeyboard ─► KeyStates ─► KeyboardReport ─► Accessory
//! ```
//!
//! The crate is `no_std` and allocation-free. Enable the `defmt` feature
//! for logging.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod aoa;
pub mod config;
pub mod error;
pub mod hid;
pub mod input;

pub use aoa::hid_keyboard::HidKeyboard;
pub use aoa::{Accessory, AccessoryId};
pub use error::Error;
pub use hid::{KeyStates, KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR};
pub use input::{KeyAction, KeyEvent, KeyMods, KeyProcessor, Scancode, TextEvent};
