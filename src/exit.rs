//! ExitOnBack - debounced multi-pad back-button exit with hand-off
//!
//! Every screen owns one of these: `poll()` each tick for the rising edge of
//! the back button across all pads, then `activate()` to wait for the button
//! to be released and either quit or replace the process image with a
//! companion program (for games, the menu binary). The ignore window armed at
//! construction and `reset()` swallows a button still held from before a
//! process hand-off.

use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

use crate::input::{PadButton, PadSet};

/// Back presses are ignored for this long after construction or `reset()`.
pub const HOLDDOWN_IGNORE: Duration = Duration::from_millis(350);
/// Upper bound on waiting for the back button release in `activate()`.
pub const RELEASE_TIMEOUT: Duration = Duration::from_millis(1200);
/// Sleep between pumps while waiting for the release.
const RELEASE_POLL: Duration = Duration::from_millis(10);

/// What `activate()` does once the back button is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitAction {
    /// Exit the process with status 0.
    Quit,
    /// Replace the process image with a companion program, passing it
    /// nothing; the companion re-derives everything from scratch.
    Handoff(PathBuf),
}

/// Rising-edge detector with an ignore window, pure over passed-in instants.
#[derive(Debug, Clone)]
pub struct EdgeGate {
    was_down: bool,
    ignore_until: Instant,
}

impl EdgeGate {
    pub fn new(now: Instant, ignore: Duration) -> Self {
        Self {
            was_down: false,
            ignore_until: now + ignore,
        }
    }

    /// Re-arm the ignore window and forget the previous sample.
    pub fn reset(&mut self, now: Instant, ignore: Duration) {
        self.ignore_until = now + ignore;
        self.was_down = false;
    }

    /// Feed the combined button state; true exactly on a rising edge outside
    /// the ignore window. State tracking continues inside the window, so the
    /// window closing over a held button cannot fabricate an edge.
    pub fn sample(&mut self, down: bool, now: Instant) -> bool {
        if now < self.ignore_until {
            self.was_down = down;
            return false;
        }
        let edge = down && !self.was_down;
        self.was_down = down;
        edge
    }
}

pub struct ExitOnBack {
    gate: EdgeGate,
    action: ExitAction,
}

impl ExitOnBack {
    pub fn new(action: ExitAction) -> Self {
        Self {
            gate: EdgeGate::new(Instant::now(), HOLDDOWN_IGNORE),
            action,
        }
    }

    /// Call after any screen transition where button state may be stale.
    pub fn reset(&mut self) {
        self.gate.reset(Instant::now(), HOLDDOWN_IGNORE);
    }

    /// True exactly on the tick the back button goes down on any pad.
    pub fn poll(&mut self, pads: &PadSet, now: Instant) -> bool {
        self.gate.sample(pads.any_held(PadButton::Back), now)
    }

    /// Wait (bounded by `RELEASE_TIMEOUT`) for the back button to be released
    /// on all pads, then perform the configured hand-off. Only returns on a
    /// failed exec; the caller must already have blanked the display.
    pub fn activate(&self, pads: &mut PadSet) -> std::io::Error {
        let t0 = Instant::now();
        while t0.elapsed() < RELEASE_TIMEOUT {
            pads.pump();
            if !pads.any_held(PadButton::Back) {
                break;
            }
            std::thread::sleep(RELEASE_POLL);
        }

        match &self.action {
            ExitAction::Quit => std::process::exit(0),
            ExitAction::Handoff(program) => {
                println!("[matrixcade] handing off to {}", program.display());
                Command::new(program).exec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IGNORE: Duration = Duration::from_millis(350);

    fn gate_past_window(base: Instant) -> (EdgeGate, Instant) {
        // First sample well past the ignore window
        (EdgeGate::new(base, IGNORE), base + Duration::from_millis(400))
    }

    #[test]
    fn one_edge_per_press_cycle() {
        let base = Instant::now();
        let (mut gate, t) = gate_past_window(base);

        assert!(!gate.sample(false, t));
        assert!(gate.sample(true, t + Duration::from_millis(10)));
        // Held: no further edges
        assert!(!gate.sample(true, t + Duration::from_millis(20)));
        assert!(!gate.sample(true, t + Duration::from_millis(30)));
        // Release and press again: a new edge
        assert!(!gate.sample(false, t + Duration::from_millis(40)));
        assert!(gate.sample(true, t + Duration::from_millis(50)));
    }

    #[test]
    fn simultaneous_multi_pad_press_is_one_edge() {
        // Two pads pressing on the same tick arrive here already OR'd;
        // the gate sees one combined transition
        let base = Instant::now();
        let (mut gate, t) = gate_past_window(base);

        let (pad_a, pad_b) = (true, true);
        assert!(gate.sample(pad_a || pad_b, t));
        assert!(!gate.sample(pad_a || pad_b, t + Duration::from_millis(10)));
    }

    #[test]
    fn ignore_window_suppresses_edges() {
        let base = Instant::now();
        let mut gate = EdgeGate::new(base, IGNORE);

        assert!(!gate.sample(true, base + Duration::from_millis(100)));
        assert!(!gate.sample(false, base + Duration::from_millis(200)));
        assert!(!gate.sample(true, base + Duration::from_millis(300)));
    }

    #[test]
    fn button_held_through_window_does_not_fire_on_close() {
        let base = Instant::now();
        let mut gate = EdgeGate::new(base, IGNORE);

        // Held from before the window opened (e.g. through a hand-off)
        assert!(!gate.sample(true, base + Duration::from_millis(100)));
        // Window closed, still held: was_down tracking means no edge
        assert!(!gate.sample(true, base + Duration::from_millis(400)));
        // A real release + press does fire
        assert!(!gate.sample(false, base + Duration::from_millis(410)));
        assert!(gate.sample(true, base + Duration::from_millis(420)));
    }

    #[test]
    fn reset_rearms_window() {
        let base = Instant::now();
        let (mut gate, t) = gate_past_window(base);

        assert!(gate.sample(true, t));
        gate.reset(t + Duration::from_millis(10), IGNORE);
        // Inside the fresh window again
        assert!(!gate.sample(true, t + Duration::from_millis(20)));
    }
}
