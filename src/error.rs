//! Unified error type for aoa-hid.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! logging.

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // AOA
    /// The accessory rejected the HID report descriptor.
    Setup,

    /// A HID event could not be submitted to the accessory.
    Push,

    // USB
    /// The underlying USB transfer failed.
    Usb,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::Setup => "HID descriptor registration failed",
            Error::Push => "HID event push failed",
            Error::Usb => "USB transfer failed",
        };
        f.write_str(msg)
    }
}
