// Pure menu logic - no I/O

pub mod carousel;
pub mod filter;
