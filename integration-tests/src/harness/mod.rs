pub mod log;
pub mod tracing;

pub use log::{LogBuilder, run_log};
pub use tracing::{CapturedEvent, capture_events};
