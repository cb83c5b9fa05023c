// Carousel menu types

use std::path::PathBuf;

use crate::menu::pure::carousel::wrap_index;

/// One launchable game found in the games directory. Entries are rebuilt
/// wholesale on every scan; identity is positional only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Upper-cased, truncated label shown on the matrix
    pub label: String,
    /// Path handed to the interpreter on launch
    pub path: PathBuf,
    /// File name, the sort key
    pub file_name: String,
}

/// Wraparound selection over the scanned entries. The index is always in
/// `[0, len)` while the list is non-empty, and 0 when it is empty.
#[derive(Debug, Default)]
pub struct Carousel {
    entries: Vec<GameEntry>,
    index: usize,
}

impl Carousel {
    pub fn new(entries: Vec<GameEntry>) -> Self {
        Self { entries, index: 0 }
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&GameEntry> {
        self.entries.get(self.index)
    }

    /// Replace the entry list; the selection resets to the front.
    pub fn rebuild(&mut self, entries: Vec<GameEntry>) {
        self.entries = entries;
        self.index = 0;
    }

    /// Move the selection by `delta` with wraparound; no-op when empty.
    pub fn navigate(&mut self, delta: i32) {
        self.index = wrap_index(self.index, delta, self.entries.len());
    }
}
