// Deflection edge + auto-repeat state machine (pure over passed-in instants)

use std::time::{Duration, Instant};

/// Delay between the onset step and the first repeat.
pub const REPEAT_DELAY: Duration = Duration::from_millis(350);
/// Interval between subsequent repeats while the stick stays deflected.
pub const REPEAT_RATE: Duration = Duration::from_millis(120);

/// Per-pad navigation repeat state: one step on deflection onset, then timed
/// auto-repeat while the stick stays past the deadzone. Returning to neutral
/// clears the state immediately.
#[derive(Debug, Clone, Default)]
pub struct AxisRepeat {
    held: i32,
    next_repeat: Option<Instant>,
}

impl AxisRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current deflection sign (-1/0/+1); returns the step to take
    /// this tick, if any.
    pub fn step(&mut self, dir: i32, now: Instant) -> Option<i32> {
        if dir == 0 {
            self.held = 0;
            self.next_repeat = None;
            return None;
        }

        // Onset, or a direction flip without passing through neutral:
        // immediate step, long delay until the first repeat
        if dir != self.held {
            self.held = dir;
            self.next_repeat = Some(now + REPEAT_DELAY);
            return Some(dir);
        }

        match self.next_repeat {
            Some(at) if now >= at => {
                self.next_repeat = Some(now + REPEAT_RATE);
                Some(dir)
            }
            _ => None,
        }
    }
}
