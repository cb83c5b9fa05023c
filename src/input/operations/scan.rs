// Gamepad scanning and opening (I/O: evdev enumeration)

use evdev::*;

use crate::input::operations::device::Pad;
use crate::input::pure::classify::{calculate_stick_calibration, classify_device};
use crate::input::types::DeviceType;

/// Scan all connected gamepads, sorted by device node path.
pub fn scan_gamepads() -> Vec<Pad> {
    let mut pads: Vec<Pad> = Vec::new();
    for (path, dev) in evdev::enumerate() {
        if classify_device(dev.supported_keys()) != DeviceType::Gamepad {
            continue;
        }
        let Some(path) = path.to_str().map(str::to_string) else {
            continue;
        };
        if let Some(pad) = setup_pad(path, dev) {
            pads.push(pad);
        }
    }
    pads.sort_by(|a, b| a.path().cmp(b.path()));
    pads
}

/// Try to open a single device node as a gamepad. Non-gamepads return None
/// silently; open/setup failures are logged.
pub fn open_gamepad(path: &str) -> Option<Pad> {
    let dev = match Device::open(path) {
        Ok(dev) => dev,
        Err(e) => {
            println!("[matrixcade] evdev: failed to open {}: {}", path, e);
            return None;
        }
    };
    if classify_device(dev.supported_keys()) != DeviceType::Gamepad {
        return None;
    }
    setup_pad(path.to_string(), dev)
}

fn setup_pad(path: String, dev: Device) -> Option<Pad> {
    if dev.set_nonblocking(true).is_err() {
        println!(
            "[matrixcade] evdev: failed to set non-blocking mode for {}",
            path
        );
        return None;
    }

    // Detect stick axis range from device info
    let (center, threshold) = if let Ok(abs_info) = dev.get_abs_state() {
        if let Some(x_info) = abs_info.get(AbsoluteAxisCode::ABS_X.0 as usize) {
            let (center, threshold) =
                calculate_stick_calibration(x_info.minimum, x_info.maximum);
            println!(
                "[matrixcade] evdev: {} stick range: {}-{}, center={}, threshold={}",
                path, x_info.minimum, x_info.maximum, center, threshold
            );
            (center, threshold)
        } else {
            // Default to signed 16-bit range
            (0, 13106)
        }
    } else {
        (0, 13106)
    };

    Some(Pad::new(path, dev, center, threshold))
}
