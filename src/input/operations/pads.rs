// PadSet: the live set of gamepads, hot-plug aware (I/O: /dev/input)

use std::time::Instant;

use crate::input::operations::device::Pad;
use crate::input::operations::scan::{open_gamepad, scan_gamepads};
use crate::input::pure::hotplug::diff_paths;
use crate::input::types::PadButton;

/// All currently attached gamepads, keyed by device node path. The set is
/// re-diffed against /dev/input every tick, so pads may come and go between
/// polls without a restart.
pub struct PadSet {
    pads: Vec<Pad>,
    // Every event node seen last tick, gamepad or not, so a non-gamepad
    // node is probed once on appearance instead of every tick
    known_nodes: Vec<String>,
}

impl PadSet {
    pub fn scan() -> Self {
        Self {
            pads: scan_gamepads(),
            known_nodes: list_event_nodes(),
        }
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// Cheap per-tick hotplug check: diff the /dev/input event nodes against
    /// last tick, open what appeared, drop what vanished. Surviving pads keep
    /// their edge/repeat state.
    pub fn refresh(&mut self) {
        let seen = list_event_nodes();
        if seen == self.known_nodes {
            return;
        }

        let (added, removed) = diff_paths(&self.known_nodes, &seen);
        if !removed.is_empty() {
            self.pads.retain(|pad| {
                let gone = removed.iter().any(|p| p == pad.path());
                if gone {
                    println!("[matrixcade] evdev: gamepad removed: {}", pad.path());
                }
                !gone
            });
        }
        for path in &added {
            if let Some(pad) = open_gamepad(path) {
                println!("[matrixcade] evdev: gamepad added: {} ({})", path, pad.name());
                self.pads.push(pad);
            }
        }
        if !added.is_empty() {
            self.pads.sort_by(|a, b| a.path().cmp(b.path()));
        }
        self.known_nodes = seen;
    }

    /// Drain events on every pad, pruning the ones whose node died mid-read.
    pub fn pump(&mut self) {
        self.pads.retain_mut(|pad| {
            let alive = pad.pump();
            if !alive {
                println!("[matrixcade] evdev: gamepad disconnected: {}", pad.path());
            }
            alive
        });
    }

    /// Whether `btn` is currently held on any pad.
    pub fn any_held(&self, btn: PadButton) -> bool {
        self.pads.iter().any(|pad| pad.held(btn))
    }

    /// Combined carousel movement from every pad's edge/repeat machine this
    /// tick (any pad may navigate).
    pub fn nav_delta(&mut self, now: Instant) -> i32 {
        self.pads.iter_mut().filter_map(|pad| pad.nav_step(now)).sum()
    }
}

fn list_event_nodes() -> Vec<String> {
    let mut nodes: Vec<String> = match std::fs::read_dir("/dev/input") {
        Ok(dir) => dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with("event"))
            .map(|name| format!("/dev/input/{}", name))
            .collect(),
        Err(_) => Vec::new(),
    };
    nodes.sort();
    nodes
}
