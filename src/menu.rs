//! Carousel menu - entry model, wraparound navigation, directory scan
//!
//! ## Module structure
//! - `types.rs`: `GameEntry` and the `Carousel` selection state
//! - `pure/`: pure functions (wraparound, labels, scan filter, dot mapping)
//! - `operations/`: the filesystem scan

pub mod operations;
pub mod pure;
pub mod types;

pub use operations::scan::{scan_games, GAME_SUFFIX, MAX_LABEL_CHARS};
pub use types::{Carousel, GameEntry};
