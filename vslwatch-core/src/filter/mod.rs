//! Filters applied to finished transactions before they are reported.
//!
//! Every filter is independent and optional. Pattern filters take a regular
//! expression; prefixing it with `!` inverts the match. The `!` is resolved
//! once when the chain is built, never per transaction.

mod chain;
mod pattern;
mod slow;

#[cfg(test)]
mod tests;

pub use chain::{FilterChain, FilterKind};
pub use pattern::Pattern;
pub use slow::{DEFAULT_SLOW_MS, InvalidThreshold, SlowThreshold};
