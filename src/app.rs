//! Application lifecycle - the context struct and the polling loop

mod context;

pub use context::AppContext;
