//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes, ascending, zero-padded,
//!           or 6 x ErrorRollOver (0x01) when more keys are held
//! ```

use heapless::Vec;

use super::key_state::KeyStates;
use crate::config::{
    ERROR_ROLL_OVER, INDEX_KEYS, INDEX_MODIFIER, KEYBOARD_REPORT_SIZE, KEYS, MAX_KEYS, RESERVED,
};
use crate::input::KeyMods;

pub const MODIFIER_NONE: u8 = 0x00;
pub const MODIFIER_LEFT_CONTROL: u8 = 1 << 0;
pub const MODIFIER_LEFT_SHIFT: u8 = 1 << 1;
pub const MODIFIER_LEFT_ALT: u8 = 1 << 2;
pub const MODIFIER_LEFT_GUI: u8 = 1 << 3;
pub const MODIFIER_RIGHT_CONTROL: u8 = 1 << 4;
pub const MODIFIER_RIGHT_SHIFT: u8 = 1 << 5;
pub const MODIFIER_RIGHT_ALT: u8 = 1 << 6;
pub const MODIFIER_RIGHT_GUI: u8 = 1 << 7;

const MODIFIER_MAP: [(KeyMods, u8); 8] = [
    (KeyMods::LCTRL, MODIFIER_LEFT_CONTROL),
    (KeyMods::LSHIFT, MODIFIER_LEFT_SHIFT),
    (KeyMods::LALT, MODIFIER_LEFT_ALT),
    (KeyMods::LGUI, MODIFIER_LEFT_GUI),
    (KeyMods::RCTRL, MODIFIER_RIGHT_CONTROL),
    (KeyMods::RSHIFT, MODIFIER_RIGHT_SHIFT),
    (KeyMods::RALT, MODIFIER_RIGHT_ALT),
    (KeyMods::RGUI, MODIFIER_RIGHT_GUI),
];

/// Map live modifier flags to the report's modifier byte.
///
/// Lock flags (Num, Caps, Mode) have no bit in the report and are dropped.
pub fn encode_modifiers(mods: KeyMods) -> u8 {
    MODIFIER_MAP
        .iter()
        .filter(|(flag, _)| mods.contains(*flag))
        .fold(MODIFIER_NONE, |acc, (_, bit)| acc | bit)
}

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; MAX_KEYS],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: MODIFIER_NONE,
            reserved: RESERVED,
            keycodes: [0; MAX_KEYS],
        }
    }

    /// Build the report for the full current key state.
    ///
    /// Keys are listed in ascending scancode order. When more than
    /// `MAX_KEYS` are held every slot carries ErrorRollOver instead, while
    /// the modifier byte is still reported.
    pub fn from_key_states(modifier: u8, states: &KeyStates) -> Self {
        let mut report = Self {
            modifier,
            ..Self::empty()
        };

        let mut held: Vec<u8, MAX_KEYS> = Vec::new();
        for code in states.pressed() {
            if held.push(code).is_err() {
                // Phantom state: too many keys to report accurately
                report.keycodes = [ERROR_ROLL_OVER; MAX_KEYS];
                return report;
            }
        }

        report.keycodes[..held.len()].copy_from_slice(&held);
        report
    }

    /// Parse a report from its wire bytes. Extra trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < KEYBOARD_REPORT_SIZE {
            return None;
        }
        let mut keycodes = [0; MAX_KEYS];
        keycodes.copy_from_slice(&data[INDEX_KEYS..KEYBOARD_REPORT_SIZE]);
        Some(Self {
            modifier: data[INDEX_MODIFIER],
            reserved: data[1],
            keycodes,
        })
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 8), or 0 if `buf` is
    /// too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[INDEX_MODIFIER] = self.modifier;
        buf[1] = self.reserved;
        buf[INDEX_KEYS..KEYBOARD_REPORT_SIZE].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    pub fn to_bytes(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        self.serialize(&mut buf);
        buf
    }

    /// Returns `true` if no keys and no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        self.modifier == MODIFIER_NONE && self.keycodes.iter().all(|&k| k == 0)
    }

    /// Returns `true` if the key slots signal ErrorRollOver.
    pub fn is_rollover(&self) -> bool {
        self.keycodes.iter().all(|&k| k == ERROR_ROLL_OVER)
    }
}

// USB HID report descriptor for a boot-protocol keyboard

/// USB HID Report Descriptor for the emulated keyboard.
///
/// For HID over AOAv2 only the report descriptor is needed. It tells the
/// device that we are a keyboard with:
///   - 8 modifier key bits (input)
///   - 1 reserved byte
///   - 5 LED indicators (output)
///   - 6 key code bytes (input), usages 0..KEYS-1
///
/// See HID 1.11, section 6.2.2 and appendices B.1 and C.
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte -
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x01, //   Input (Constant)
    //
    //   - LED output (5 bits + 3 padding) -
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x05, //   Report Count (5)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x75, 0x03, //   Report Size (3)
    0x95, 0x01, //   Report Count (1)
    0x91, 0x01, //   Output (Constant)
    //
    //   - Key codes (6 bytes) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, (KEYS - 1) as u8, //   Usage Maximum (100)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, (KEYS - 1) as u8, //   Logical Maximum (100)
    0x75, 0x08, //   Report Size (8)
    0x95, MAX_KEYS as u8, //   Report Count (6)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];
