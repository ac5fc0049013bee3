pub mod formatter;

pub use formatter::{print_report, print_types, progress_line, summary_line, type_lines};
