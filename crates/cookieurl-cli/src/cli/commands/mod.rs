//! CLI command handlers, one file per command group.

mod completions;
mod copy_open;
mod generate;
mod history;
mod presets;

pub use completions::{run_completions, run_manpage};
pub use copy_open::{run_copy, run_open};
pub use generate::run_generate;
pub use history::{run_clear_history, run_history};
pub use presets::{run_delete_preset, run_presets, run_save_preset, run_show_preset};
