//! CLI command handlers, one per file.

mod list;
mod run;

pub use list::run_list;
pub use run::{run_group, summary_line, RunStatus};

/// "1 file", "4 files".
pub(crate) fn file_count(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", n)
    }
}
