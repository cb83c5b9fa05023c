// Menu operations - filesystem scan

pub mod scan;

pub use scan::scan_games;
