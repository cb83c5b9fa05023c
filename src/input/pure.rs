// Pure input logic - no I/O

pub mod classify;
pub mod hotplug;
pub mod repeat;
