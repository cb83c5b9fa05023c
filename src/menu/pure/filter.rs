// Scan filter (pure functions)

/// Whether a directory entry name is a launchable game: matches the suffix
/// case-insensitively and is not hidden.
pub fn is_game_file(file_name: &str, suffix: &str) -> bool {
    !file_name.starts_with('.') && file_name.to_lowercase().ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_match_is_case_insensitive() {
        assert!(is_game_file("b.py", ".py"));
        assert!(is_game_file("A.PY", ".py"));
        assert!(is_game_file("Mixed.Py", ".py"));
    }

    #[test]
    fn hidden_and_foreign_files_excluded() {
        assert!(!is_game_file(".hidden.py", ".py"));
        assert!(!is_game_file("c.txt", ".py"));
        assert!(!is_game_file("pyfile", ".py"));
    }
}
