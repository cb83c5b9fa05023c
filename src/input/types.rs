// Gamepad input types

#[derive(Clone, PartialEq, Copy, Debug)]
pub enum DeviceType {
    Gamepad,
    Other,
}

/// Digital actions the menu reads off a pad.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadButton {
    /// A (BTN_SOUTH): launch the selected game
    Confirm,
    /// B (BTN_EAST): rescan the games directory
    Refresh,
    /// Back (BTN_SELECT): leave the current screen
    Back,
}
