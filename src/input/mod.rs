//! Input boundary - key and text notifications from the event source.
//!
//! Events arrive already decoded by the windowing layer: a scancode
//! (physical key position), the press/release action, the repeat flag and
//! the modifier flags that are live at the time of the event. Scancode
//! values coincide with USB HID keyboard usages for every key this crate
//! can forward.

use bitflags::bitflags;

use crate::config::{KEYS, SCANCODE_LCTRL, SCANCODE_RGUI};

/// Whether a key went down or came up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    Down,
    Up,
}

bitflags! {
    /// Modifier flags carried by a key event.
    ///
    /// Bit values follow the event source's `KMOD_*` convention, not the
    /// HID modifier byte; see [`crate::hid::keyboard::encode_modifiers`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyMods: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LGUI = 0x0400;
        const RGUI = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyMods {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "KeyMods({=u16:#x})", self.bits());
    }
}

/// Layout-independent key identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scancode(pub u16);

/// How the keyboard translator treats a scancode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScancodeKind {
    /// Ordinary key, eligible for a report key slot.
    Key(u8),
    /// Left/right Control, Shift, Alt or GUI.
    Modifier,
    /// No HID usage we can express.
    Unsupported,
}

impl Scancode {
    pub const A: Scancode = Scancode(4);
    pub const LCTRL: Scancode = Scancode(SCANCODE_LCTRL);
    pub const LSHIFT: Scancode = Scancode(225);
    pub const LALT: Scancode = Scancode(226);
    pub const LGUI: Scancode = Scancode(227);
    pub const RCTRL: Scancode = Scancode(228);
    pub const RSHIFT: Scancode = Scancode(229);
    pub const RALT: Scancode = Scancode(230);
    pub const RGUI: Scancode = Scancode(SCANCODE_RGUI);

    pub const fn is_modifier(self) -> bool {
        self.0 >= SCANCODE_LCTRL && self.0 <= SCANCODE_RGUI
    }

    pub fn kind(self) -> ScancodeKind {
        if usize::from(self.0) < KEYS {
            // KEYS fits in a byte, so the narrowing is exact.
            ScancodeKind::Key(self.0 as u8)
        } else if self.is_modifier() {
            ScancodeKind::Modifier
        } else {
            ScancodeKind::Unsupported
        }
    }
}

/// A key press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub action: KeyAction,
    pub scancode: Scancode,
    /// Set by the source for auto-repeated key-down events.
    pub repeat: bool,
    /// Modifier flags live at the time of the event.
    pub mods: KeyMods,
}

impl KeyEvent {
    pub const fn down(scancode: Scancode, mods: KeyMods) -> Self {
        Self {
            action: KeyAction::Down,
            scancode,
            repeat: false,
            mods,
        }
    }

    pub const fn up(scancode: Scancode, mods: KeyMods) -> Self {
        Self {
            action: KeyAction::Up,
            scancode,
            repeat: false,
            mods,
        }
    }

    /// Mark this event as an auto-repeat.
    pub const fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn is_down(&self) -> bool {
        self.action == KeyAction::Down
    }
}

/// Composed text from the input method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextEvent<'a> {
    pub text: &'a str,
}

/// Something that consumes keyboard input.
///
/// The event loop owns one processor per input surface and calls it on the
/// same thread that dispatches the events.
pub trait KeyProcessor {
    fn process_key(&mut self, event: &KeyEvent);

    fn process_text(&mut self, event: &TextEvent<'_>);
}
