// Pad struct and event pump (I/O: calls fetch_events)

use std::time::Instant;

use evdev::*;

use crate::input::pure::classify::deflection;
use crate::input::pure::repeat::AxisRepeat;
use crate::input::types::PadButton;

/// One open gamepad plus the per-device state the menu tracks for it.
pub struct Pad {
    path: String,
    dev: Device,
    // Held state of the buttons the menu cares about (updated by events)
    confirm_held: bool,
    refresh_held: bool,
    back_held: bool,
    // Current stick/hat positions (persisted between polls)
    stick_x: i32,
    hat_x: i32,
    // Axis range info for the deadzone
    stick_center: i32,
    stick_threshold: i32,
    repeat: AxisRepeat,
}

impl Pad {
    pub fn new(path: String, dev: Device, stick_center: i32, stick_threshold: i32) -> Self {
        Self {
            path,
            dev,
            confirm_held: false,
            refresh_held: false,
            back_held: false,
            stick_x: stick_center,
            hat_x: 0,
            stick_center,
            stick_threshold,
            repeat: AxisRepeat::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the evdev device name (e.g., "Microsoft X-Box One S pad")
    pub fn name(&self) -> &str {
        self.dev.name().unwrap_or("")
    }

    pub fn held(&self, btn: PadButton) -> bool {
        match btn {
            PadButton::Confirm => self.confirm_held,
            PadButton::Refresh => self.refresh_held,
            PadButton::Back => self.back_held,
        }
    }

    /// Drain pending events into the tracked state. Returns false when the
    /// device is gone and should be pruned from the set.
    pub fn pump(&mut self) -> bool {
        match self.dev.fetch_events() {
            Ok(events) => {
                for event in events {
                    match event.destructure() {
                        EventSummary::Key(_, KeyCode::BTN_SOUTH, v) => {
                            self.confirm_held = v != 0;
                        }
                        EventSummary::Key(_, KeyCode::BTN_EAST, v) => {
                            self.refresh_held = v != 0;
                        }
                        EventSummary::Key(_, KeyCode::BTN_SELECT, v) => {
                            self.back_held = v != 0;
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X, val) => {
                            self.stick_x = val;
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0X, val) => {
                            self.hat_x = val;
                        }
                        _ => {}
                    }
                }
                true
            }
            // ENODEV - device disconnected
            Err(e) if e.raw_os_error() == Some(19) => false,
            // Transient read failures are tolerated
            Err(_) => true,
        }
    }

    /// Current deflection sign of the navigation axis. The D-pad hat wins
    /// over the stick when both are active.
    pub fn deflection(&self) -> i32 {
        if self.hat_x != 0 {
            return self.hat_x.signum();
        }
        deflection(self.stick_x, self.stick_center, self.stick_threshold)
    }

    /// Run this pad's edge/auto-repeat machine; returns a carousel step when
    /// one is due.
    pub fn nav_step(&mut self, now: Instant) -> Option<i32> {
        let dir = self.deflection();
        self.repeat.step(dir, now)
    }
}
