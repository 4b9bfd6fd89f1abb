//! Crate-wide constants and compile-time configuration.
//!
//! Report geometry, the accessory id and the scancode ranges live here so
//! the descriptor, the encoder and the translator all agree on them.

// AOA

/// Accessory id under which the keyboard descriptor is registered.
pub const HID_KEYBOARD_ACCESSORY_ID: u16 = 1;

// Report geometry

/// Number of keyboard usages tracked in the key state table (0..KEYS).
///
/// Covers every usage up to and including Non-US Backslash (0x64), which
/// is the range the descriptor advertises.
pub const KEYS: usize = 101;

/// Maximum number of simultaneous non-modifier keys in one report.
///
/// Six is what the boot protocol requires for BIOS support.
pub const MAX_KEYS: usize = 6;

/// Byte offset of the modifier bitfield in a report.
pub const INDEX_MODIFIER: usize = 0;

/// Byte offset of the first key slot in a report.
pub const INDEX_KEYS: usize = 2;

/// Keyboard report size in bytes: modifier, reserved, key slots.
pub const KEYBOARD_REPORT_SIZE: usize = INDEX_KEYS + MAX_KEYS;

/// Value of the reserved byte.
pub const RESERVED: u8 = 0x00;

/// Usage written to every key slot when too many keys are held.
pub const ERROR_ROLL_OVER: u8 = 0x01;

// Scancodes

/// First modifier scancode (Left Control).
pub const SCANCODE_LCTRL: u16 = 224;

/// Last modifier scancode (Right GUI).
pub const SCANCODE_RGUI: u16 = 231;
