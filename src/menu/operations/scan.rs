// Games directory scan (I/O: walkdir)

use std::path::Path;

use walkdir::WalkDir;

use crate::menu::pure::carousel::label_for;
use crate::menu::pure::filter::is_game_file;
use crate::menu::types::GameEntry;

/// Lower-case suffix a launchable game file must carry.
pub const GAME_SUFFIX: &str = ".py";
/// Labels are cut to this many characters to fit the 128px-wide matrix.
pub const MAX_LABEL_CHARS: usize = 16;

/// Flat scan of the games directory, sorted lexicographically by file name.
/// A missing or empty directory is a normal empty result, not an error.
pub fn scan_games(dir: &Path) -> Vec<GameEntry> {
    let mut entries: Vec<GameEntry> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_str()?.to_string();
            if !is_game_file(&file_name, GAME_SUFFIX) {
                return None;
            }
            Some(GameEntry {
                label: label_for(&file_name, MAX_LABEL_CHARS),
                path: entry.path().to_path_buf(),
                file_name,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn scan_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "b.py");
        touch(tmp.path(), "A.PY");
        touch(tmp.path(), ".hidden.py");
        touch(tmp.path(), "c.txt");

        let entries = scan_games(tmp.path());
        let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["A.PY", "b.py"]);
        assert_eq!(entries[0].label, "A");
        assert_eq!(entries[1].path, tmp.path().join("b.py"));
    }

    #[test]
    fn scan_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("nope");
        assert!(scan_games(&gone).is_empty());
    }

    #[test]
    fn scan_ignores_directories_and_stays_flat() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub.py")).unwrap();
        touch(tmp.path(), "snake.py");
        touch(&tmp.path().join("sub.py"), "nested.py");

        let entries = scan_games(tmp.path());
        let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["snake.py"]);
    }
}
