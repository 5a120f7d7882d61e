mod error;
mod loader;
mod raw;
mod types;


pub use error::ConfigError;
pub use loader::{load_file, load_settings};
pub use raw::{RawSettings, SlowValue};
pub use types::{ColorChoice, OutputFormat, Settings};
