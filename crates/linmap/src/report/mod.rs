//! HTML reporting for a finished run.
pub mod plots;
pub mod report;

pub use plots::plot_commands;
pub use report::{render_report, write_report};
