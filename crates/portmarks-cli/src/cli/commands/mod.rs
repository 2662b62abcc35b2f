//! CLI command handlers. Each command is in its own file.

mod completions;
mod filename;
mod render;
mod sanitize;
mod save;

pub use completions::{run_completions, run_man};
pub use filename::run_filename;
pub use render::run_render;
pub use sanitize::run_sanitize;
pub use save::run_save;
