//! Gamepad input - evdev polling, calibration, hotplug
//!
//! ## Module structure
//! - `types.rs`: button and device types
//! - `pure/`: pure functions (classification, deadzone, repeat machine, hotplug diff)
//! - `operations/`: atomic side effects (event pump, scanning, the live PadSet)

pub mod operations;
pub mod pure;
pub mod types;

pub use operations::{Pad, PadSet};
pub use types::{DeviceType, PadButton};
