use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap()));

/// Directory scanned for launchable games.
pub static GAMES_DIR: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join("games"));

/// Interpreter the games are handed to on launch.
pub static BIN_PYTHON: LazyLock<PathBuf> = LazyLock::new(|| {
    let bin_candidates = [PathBuf::from("/usr/bin"), PathBuf::from("/usr/local/bin")];

    for candidate in &bin_candidates {
        let bin = candidate.join("python3");
        if bin.exists() {
            return bin;
        }
    }

    PathBuf::from("python3")
});
