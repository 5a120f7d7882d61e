use crate::engine::transaction::{Callback, CallbackOutcomes};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Hit,
    Miss,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Hit => "HIT",
            Verdict::Miss => "MISS",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide from the final callback outcomes whether the request was served
/// from cache.
///
/// A hit needs all of: `vcl_recv` chose `lookup`, `vcl_fetch` never returned,
/// `vcl_hit` chose `deliver`, and `vcl_deliver` chose `deliver`. Callbacks
/// that never fired count as empty.
pub fn classify(outcomes: &CallbackOutcomes) -> Verdict {
    if outcomes.get(Callback::Recv) != "lookup" {
        return Verdict::Miss;
    }
    if !outcomes.get(Callback::Fetch).is_empty() {
        return Verdict::Miss;
    }
    if outcomes.get(Callback::Hit) != "deliver" {
        return Verdict::Miss;
    }
    if outcomes.get(Callback::Deliver) != "deliver" {
        return Verdict::Miss;
    }
    Verdict::Hit
}
