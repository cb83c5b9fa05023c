//! Game launching - validation and one-way process replacement
//!
//! Launching replaces this process image with the interpreter running the
//! selected game; the game later execs the menu binary again through its own
//! back-button hand-off. No state crosses the transition.

use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::Command;

use crate::menu::GameEntry;
use crate::paths::BIN_PYTHON;

/// A target can vanish between scan and launch; re-check before tearing
/// anything down. A missing target keeps the menu on screen.
pub fn validate_target(path: &Path) -> bool {
    path.is_file()
}

/// Replace the process image with `python3 <target>`. Only returns when the
/// exec itself failed, which is fatal: the caller has already blanked the
/// display and there is no fallback.
pub fn exec_game(entry: &GameEntry) -> std::io::Error {
    println!("[matrixcade] launching: {}", entry.file_name);
    Command::new(&*BIN_PYTHON).arg(&entry.path).exec()
}
