/*!
 * I/O Module
 * Loading process lists and rendering run reports
 */

pub mod loader;
pub mod report;

pub use loader::{parse_processes, read_process_data};
pub use report::{render_banner, render_gantt_chart, render_results, render_run, to_json};
