//! Unit tests for keyboard report encoding.
//!
//! These tests run on the host and verify how the key state table and the
//! modifier byte are combined into a report.

use super::key_state::KeyStates;
use super::keyboard::*;
use crate::config::{ERROR_ROLL_OVER, KEYBOARD_REPORT_SIZE, KEYS, MAX_KEYS};

fn states_with(codes: &[usize]) -> KeyStates {
    let mut states = KeyStates::new();
    for &code in codes {
        states.set(code, true);
    }
    states
}

// ═══════════════════════════════════════════════════════════════════════════
// Report Encoder Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert!(!report.is_rollover());
    assert_eq!(report.to_bytes(), [0; KEYBOARD_REPORT_SIZE]);
}

#[test]
fn encode_no_keys() {
    let report = KeyboardReport::from_key_states(MODIFIER_NONE, &KeyStates::new());
    assert_eq!(report, KeyboardReport::empty());
}

#[test]
fn encode_single_key() {
    // 'a' is usage 0x04
    let report = KeyboardReport::from_key_states(MODIFIER_NONE, &states_with(&[4]));
    assert_eq!(report.to_bytes(), [0x00, 0x00, 0x04, 0, 0, 0, 0, 0]);
}

#[test]
fn encode_keys_ascending_zero_padded() {
    let report = KeyboardReport::from_key_states(MODIFIER_NONE, &states_with(&[0x2C, 0x04, 0x16]));
    assert_eq!(report.keycodes, [0x04, 0x16, 0x2C, 0, 0, 0]);
}

#[test]
fn encode_exactly_max_keys() {
    let report =
        KeyboardReport::from_key_states(MODIFIER_LEFT_SHIFT, &states_with(&[9, 8, 7, 6, 5, 4]));
    assert_eq!(report.to_bytes(), [0x02, 0x00, 4, 5, 6, 7, 8, 9]);
    assert!(!report.is_rollover());
}

#[test]
fn encode_rollover_keeps_modifier() {
    let modifier = MODIFIER_LEFT_CONTROL | MODIFIER_RIGHT_ALT;
    let report = KeyboardReport::from_key_states(modifier, &states_with(&[4, 5, 6, 7, 8, 9, 10]));
    assert_eq!(
        report.to_bytes(),
        [modifier, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01]
    );
    assert!(report.is_rollover());
}

#[test]
fn encode_rollover_independent_of_which_keys() {
    let all: heapless::Vec<usize, KEYS> = (0..KEYS).collect();
    let report = KeyboardReport::from_key_states(MODIFIER_NONE, &states_with(&all));
    assert_eq!(report.keycodes, [ERROR_ROLL_OVER; MAX_KEYS]);

    let high = KeyboardReport::from_key_states(MODIFIER_NONE, &states_with(&[94, 95, 96, 97, 98, 99, 100]));
    assert_eq!(high.keycodes, [ERROR_ROLL_OVER; MAX_KEYS]);
}

#[test]
fn encode_recovers_after_rollover() {
    let mut states = states_with(&[4, 5, 6, 7, 8, 9, 10]);
    assert!(KeyboardReport::from_key_states(MODIFIER_NONE, &states).is_rollover());

    states.set(10, false);
    let report = KeyboardReport::from_key_states(MODIFIER_NONE, &states);
    assert_eq!(report.keycodes, [4, 5, 6, 7, 8, 9]);
}

#[test]
fn reserved_byte_is_always_zero() {
    let report = KeyboardReport::from_key_states(0xFF, &states_with(&[4, 5]));
    assert_eq!(report.reserved, 0);
    assert_eq!(report.to_bytes()[1], 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Serialisation Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut small_buf = [0u8; 4];
    let written = report.serialize(&mut small_buf);
    assert_eq!(written, 0); // Should fail gracefully
}

#[test]
fn keyboard_report_serialize_into_larger_buffer() {
    let report = KeyboardReport::from_key_states(MODIFIER_LEFT_GUI, &states_with(&[0x28]));
    let mut buf = [0xAAu8; 12];
    assert_eq!(report.serialize(&mut buf), KEYBOARD_REPORT_SIZE);
    assert_eq!(&buf[..8], &[0x08, 0x00, 0x28, 0, 0, 0, 0, 0]);
    assert_eq!(&buf[8..], &[0xAA; 4]);
}

#[test]
fn keyboard_report_from_short_bytes_fails() {
    assert!(KeyboardReport::from_bytes(&[]).is_none());
    assert!(KeyboardReport::from_bytes(&[0x02, 0x00, 0x04]).is_none());
    assert!(KeyboardReport::from_bytes(&[0; 7]).is_none());
}

#[test]
fn keyboard_report_parses_wire_bytes() {
    let report = KeyboardReport::from_bytes(&[0x22, 0x00, 0x04, 0x05, 0, 0, 0, 0, 0xFF]).unwrap();
    assert_eq!(report.modifier, MODIFIER_LEFT_SHIFT | MODIFIER_RIGHT_SHIFT);
    assert_eq!(report.keycodes, [0x04, 0x05, 0, 0, 0, 0]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Report Descriptor Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn descriptor_is_bit_exact() {
    let expected: [u8; 63] = [
        0x05, 0x01, 0x09, 0x06, 0xA1, 0x01, // Keyboard application collection
        0x05, 0x07, 0x19, 0xE0, 0x29, 0xE7, 0x15, 0x00, 0x25, 0x01, 0x75, 0x01, 0x95, 0x08,
        0x81, 0x02, // Modifiers
        0x75, 0x08, 0x95, 0x01, 0x81, 0x01, // Reserved
        0x05, 0x08, 0x19, 0x01, 0x29, 0x05, 0x75, 0x01, 0x95, 0x05, 0x91, 0x02, // LEDs
        0x75, 0x03, 0x95, 0x01, 0x91, 0x01, // LED padding
        0x05, 0x07, 0x19, 0x00, 0x29, 0x64, 0x15, 0x00, 0x25, 0x64, 0x75, 0x08, 0x95, 0x06,
        0x81, 0x00, // Keys
        0xC0,
    ];
    assert_eq!(KEYBOARD_REPORT_DESCRIPTOR, &expected[..]);
}

#[test]
fn descriptor_bits_add_up_to_report_size() {
    // Walk short items and total the input bits.
    let desc = KEYBOARD_REPORT_DESCRIPTOR;
    let (mut size, mut count, mut input_bits) = (0u32, 0u32, 0u32);
    let mut i = 0;
    while i < desc.len() {
        let prefix = desc[i];
        let len = match prefix & 0x03 {
            3 => 4,
            n => n as usize,
        };
        let data = desc[i + 1..i + 1 + len]
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        match prefix & 0xFC {
            0x74 => size = data,
            0x94 => count = data,
            0x80 => input_bits += size * count,
            _ => {}
        }
        i += 1 + len;
    }
    assert_eq!(input_bits as usize, KEYBOARD_REPORT_SIZE * 8);
}
