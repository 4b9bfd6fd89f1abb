//! Per-device table of held keys, indexed by scancode.

use crate::config::KEYS;

/// Which of the `KEYS` trackable usages are currently held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyStates {
    keys: [bool; KEYS],
}

impl Default for KeyStates {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStates {
    /// All keys released.
    pub const fn new() -> Self {
        Self {
            keys: [false; KEYS],
        }
    }

    /// Record a press or release. Out-of-range scancodes are ignored.
    pub fn set(&mut self, scancode: usize, pressed: bool) {
        if let Some(slot) = self.keys.get_mut(scancode) {
            *slot = pressed;
        }
    }

    pub fn is_pressed(&self, scancode: usize) -> bool {
        self.keys.get(scancode).copied().unwrap_or(false)
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.keys = [false; KEYS];
    }

    /// Held scancodes in ascending numeric order.
    pub fn pressed(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            // KEYS <= 256, every index fits in a byte.
            .map(|(code, _)| code as u8)
    }

    pub fn pressed_count(&self) -> usize {
        self.keys.iter().filter(|&&held| held).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_released() {
        let states = KeyStates::new();
        assert_eq!(states.pressed_count(), 0);
        assert!((0..KEYS).all(|code| !states.is_pressed(code)));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut states = KeyStates::new();
        states.set(KEYS, true);
        states.set(usize::MAX, true);
        assert_eq!(states.pressed_count(), 0);
        assert!(!states.is_pressed(KEYS));
    }

    #[test]
    fn pressed_is_ascending_not_press_order() {
        let mut states = KeyStates::new();
        states.set(0x1D, true);
        states.set(0x04, true);
        states.set(0x10, true);
        let mut out = heapless::Vec::<u8, 8>::new();
        for code in states.pressed() {
            out.push(code).unwrap();
        }
        assert_eq!(out.as_slice(), &[0x04, 0x10, 0x1D]);
    }

    #[test]
    fn release_and_reset() {
        let mut states = KeyStates::new();
        states.set(4, true);
        states.set(5, true);
        states.set(4, false);
        assert!(!states.is_pressed(4));
        assert!(states.is_pressed(5));
        states.reset();
        assert_eq!(states, KeyStates::default());
    }
}
