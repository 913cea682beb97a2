//! CLI command implementations.
//!
//! - **analyze**: run the engine over a project and derive an exit status
//!   from its report
//! - **batch**: feed an explicit file set through the engine one at a time

pub mod analyze;
pub mod batch;

pub use analyze::{exit_status, handle_analyze, run_analysis, AnalyzeConfig};
pub use batch::{handle_batch, BatchConfig};
