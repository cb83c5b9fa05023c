//! Matrix UI - palette and menu frame rendering

pub mod render;
pub mod theme;

pub use render::draw_menu;
