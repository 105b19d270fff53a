mod config;
mod handler;
mod invoke;
mod normalize;

pub mod event;

// Re-export public API
pub use crate::config::InvokeConfig;
pub use handler::{handle, handle_json};
pub use invoke::{run_handle, run_rewrite};
pub use normalize::{DEFAULT_DOCUMENT, Rewrite, normalize, normalize_in_place};
