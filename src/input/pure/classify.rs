// Device classification and stick calibration (pure functions)

use evdev::{AttributeSetRef, KeyCode};

use crate::input::types::DeviceType;

/// Classify an evdev device by its supported keys
pub fn classify_device(supported_keys: Option<&AttributeSetRef<KeyCode>>) -> DeviceType {
    if supported_keys.map_or(false, |keys| keys.contains(KeyCode::BTN_SOUTH)) {
        DeviceType::Gamepad
    } else {
        DeviceType::Other
    }
}

/// Calculate stick center and deadzone threshold from axis min/max values.
/// Returns (center, threshold) where threshold is 40% of the half-range.
pub fn calculate_stick_calibration(min: i32, max: i32) -> (i32, i32) {
    let center = (min + max) / 2;
    let half_range = (max - min) / 2;
    let threshold = half_range * 2 / 5;
    (center, threshold)
}

/// Deflection sign of a raw axis value: -1, 0 or +1 once past the deadzone.
pub fn deflection(value: i32, center: i32, threshold: i32) -> i32 {
    if value > center + threshold {
        1
    } else if value < center - threshold {
        -1
    } else {
        0
    }
}
