//! HID keyboard over AOA.
//!
//! Translates key events into boot-protocol keyboard reports and pushes
//! them to the accessory. Every report is rebuilt from the full key state,
//! so a report lost on the wire is corrected by the next one.

use super::{Accessory, AccessoryId};
use crate::config::HID_KEYBOARD_ACCESSORY_ID;
use crate::error::Error;
use crate::hid::keyboard::{encode_modifiers, KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR};
use crate::hid::KeyStates;
use crate::input::{KeyEvent, KeyProcessor, ScancodeKind, TextEvent};

/// A keyboard registered on the accessory.
///
/// Dropping it unregisters the HID device, which lets the device bring back
/// its own input surface (on Android, the soft keyboard).
pub struct HidKeyboard<A: Accessory> {
    accessory: A,
    keys: KeyStates,
}

impl<A: Accessory> HidKeyboard<A> {
    /// Register the keyboard descriptor and start with all keys released.
    ///
    /// Fails with [`Error::Setup`] if the accessory rejects the descriptor;
    /// keyboard emulation is then unavailable for this session.
    pub fn new(mut accessory: A) -> Result<Self, Error> {
        let registered =
            accessory.setup_hid(HID_KEYBOARD_ACCESSORY_ID, KEYBOARD_REPORT_DESCRIPTOR);
        if let Err(e) = registered {
            warn!("Register HID for keyboard failed: {}", e);
            return Err(Error::Setup);
        }

        info!(
            "HID keyboard registered (accessory {}, {} byte descriptor)",
            HID_KEYBOARD_ACCESSORY_ID,
            KEYBOARD_REPORT_DESCRIPTOR.len()
        );

        Ok(Self {
            accessory,
            keys: KeyStates::new(),
        })
    }

    pub fn accessory_id(&self) -> AccessoryId {
        HID_KEYBOARD_ACCESSORY_ID
    }

    pub fn key_states(&self) -> &KeyStates {
        &self.keys
    }

    /// Apply `event` to the key state and build the resulting report.
    ///
    /// Returns `None` for repeats and for scancodes with no HID usage; in
    /// both cases the key state is left untouched. Modifier keys never
    /// occupy a key slot: they reach the report only through the live
    /// modifier flags of the event.
    pub fn convert(&mut self, event: &KeyEvent) -> Option<KeyboardReport> {
        let modifier = encode_modifiers(event.mods);
        trace!(
            "Type: {}, Repeat: {}, Modifiers: {=u8:#x}, Key: {=u16:#x}",
            if event.is_down() { "down" } else { "up" },
            event.repeat,
            modifier,
            event.scancode.0
        );

        // The device handles key repeat itself.
        if event.repeat {
            return None;
        }

        match event.scancode.kind() {
            ScancodeKind::Key(code) => {
                let pressed = event.is_down();
                self.keys.set(usize::from(code), pressed);
                trace!("keys[{=u8:#x}] = {}", code, pressed);
            }
            // Still reported: pressing Ctrl while 'a' is held must update
            // the modifier byte.
            ScancodeKind::Modifier => {}
            ScancodeKind::Unsupported => return None,
        }

        Some(KeyboardReport::from_key_states(modifier, &self.keys))
    }

    /// Hand one report to the accessory.
    pub fn push(&mut self, report: &KeyboardReport) -> Result<(), Error> {
        self.accessory
            .push_hid_event(HID_KEYBOARD_ACCESSORY_ID, &report.to_bytes())
            .map_err(|e| {
                debug!("Accessory push error: {}", e);
                Error::Push
            })
    }
}

impl<A: Accessory> KeyProcessor for HidKeyboard<A> {
    fn process_key(&mut self, event: &KeyEvent) {
        let Some(report) = self.convert(event) else {
            return;
        };

        if let Err(e) = self.push(&report) {
            warn!("Could not request HID event: {}", e);
        }
    }

    fn process_text(&mut self, _event: &TextEvent<'_>) {
        // Never forward text over HID, the keys were already injected
    }
}

impl<A: Accessory> Drop for HidKeyboard<A> {
    fn drop(&mut self) {
        match self.accessory.unregister_hid(HID_KEYBOARD_ACCESSORY_ID) {
            Ok(()) => debug!("HID keyboard unregistered"),
            Err(e) => warn!("Could not unregister HID: {}", e),
        }
    }
}
