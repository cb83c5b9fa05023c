// Input operations - atomic I/O functions

pub mod device;
pub mod pads;
pub mod scan;

pub use device::Pad;
pub use pads::PadSet;
pub use scan::{open_gamepad, scan_gamepads};
