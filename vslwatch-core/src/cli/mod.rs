pub mod config;
pub mod run;
pub mod watch;

#[cfg(test)]
mod tests;

pub use run::{run_watch, stream};
pub use watch::WatchArgs;
