// Carousel index math and label derivation (pure functions)

/// Apply a signed step to `index` with wraparound; 0 when the list is empty.
pub fn wrap_index(index: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as i64 + delta as i64).rem_euclid(len as i64) as usize
}

/// Map the selection onto a capped row of position dots. With more entries
/// than dots the index is mapped proportionally (floor), so the first entry
/// lights the first dot and the last entry the last.
pub fn dot_position(current: usize, total: usize, shown: usize) -> usize {
    if total <= 1 || shown <= 1 {
        return 0;
    }
    current * (shown - 1) / (total - 1)
}

/// Display label for a game file: extension stripped, upper-cased, truncated.
pub fn label_for(file_name: &str, max_chars: usize) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    stem.to_uppercase().chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_wraps_modulo_len() {
        assert_eq!(wrap_index(0, 1, 3), 1);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(1, -5, 3), 2);
    }

    #[test]
    fn wrap_index_empty_list_stays_zero() {
        assert_eq!(wrap_index(0, 1, 0), 0);
        assert_eq!(wrap_index(0, -1, 0), 0);
    }

    #[test]
    fn dot_position_maps_endpoints() {
        // 30 entries onto 14 dots
        assert_eq!(dot_position(0, 30, 14), 0);
        assert_eq!(dot_position(29, 30, 14), 13);
        // Monotone in between
        let mut last = 0;
        for i in 0..30 {
            let dot = dot_position(i, 30, 14);
            assert!(dot >= last && dot <= 13);
            last = dot;
        }
    }

    #[test]
    fn dot_position_identity_when_under_budget() {
        for i in 0..5 {
            assert_eq!(dot_position(i, 5, 5), i);
        }
    }

    #[test]
    fn label_strips_extension_and_uppercases() {
        assert_eq!(label_for("Snake.py", 16), "SNAKE");
        assert_eq!(label_for("OnFire!.py", 16), "ONFIRE!");
    }

    #[test]
    fn label_truncates_long_names() {
        assert_eq!(
            label_for("a_very_long_game_name_indeed.py", 16),
            "A_VERY_LONG_GAME"
        );
    }

    #[test]
    fn label_keeps_only_last_extension() {
        assert_eq!(label_for("foo.tar.py", 16), "FOO.TAR");
        assert_eq!(label_for("nodot", 16), "NODOT");
    }
}
