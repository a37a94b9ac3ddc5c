//! JSON records returned by the Ring API.
//!
//! Decoding is lenient: missing or null fields fall back to their defaults
//! and unknown fields are ignored.

mod de;
mod device;
mod ding;
mod history;
mod profile;

pub use device::{Devices, Doorbot};
pub use ding::Ding;
pub use history::{DoorbotRef, History, RecordingRef};
pub use profile::Profile;
