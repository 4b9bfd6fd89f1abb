//! AOA boundary - registers HID devices with the attached device and
//! pushes their reports.
//!
//! The Android Open Accessory v2 protocol lets a USB host register HID
//! devices on the connected device through control transfers. Each device
//! is identified by an accessory id chosen by the host:
//!
//! - `setup_hid`: register the id together with its report descriptor
//! - `push_hid_event`: send one input report for that id
//! - `unregister_hid`: remove the id again
//!
//! The transfers themselves live outside this crate, behind [`Accessory`].

pub mod hid_keyboard;

use crate::error::Error;

/// Host-chosen identifier of one HID device on the accessory.
pub type AccessoryId = u16;

/// The accessory transport.
///
/// `push_hid_event` may block briefly on USB I/O; callers treat every
/// method as a single synchronous call.
pub trait Accessory {
    /// Register a HID device and its report descriptor.
    fn setup_hid(&mut self, id: AccessoryId, report_desc: &[u8]) -> Result<(), Error>;

    /// Submit one input report.
    fn push_hid_event(&mut self, id: AccessoryId, buffer: &[u8]) -> Result<(), Error>;

    /// Unregister a previously set up HID device.
    fn unregister_hid(&mut self, id: AccessoryId) -> Result<(), Error>;
}

impl<A: Accessory + ?Sized> Accessory for &mut A {
    fn setup_hid(&mut self, id: AccessoryId, report_desc: &[u8]) -> Result<(), Error> {
        (**self).setup_hid(id, report_desc)
    }

    fn push_hid_event(&mut self, id: AccessoryId, buffer: &[u8]) -> Result<(), Error> {
        (**self).push_hid_event(id, buffer)
    }

    fn unregister_hid(&mut self, id: AccessoryId) -> Result<(), Error> {
        (**self).unregister_hid(id)
    }
}
