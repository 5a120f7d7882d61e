//! Transaction correlation engine.
//!
//! Log lines for many requests arrive interleaved. Each line names the session
//! (worker) it came from; the session's current transaction collects request,
//! response and VCL details until `ReqEnd` closes it. At that point the
//! transaction is classified, filtered and handed back as a
//! [`TransactionReport`], and all of its state is released.
//!
//! ```text
//! Record
//!   → Engine::process
//!   → SessionTracker / TransactionStore / CallCoupler
//!   → ReqEnd → classify → FilterChain
//!   → TransactionReport
//! ```
//!
//! State for a transaction is released by its `ReqEnd`, or when a newer
//! `ReqStart` on the same session replaces it. `SessionClose` only drops the
//! session's address.

mod classifier;
mod coupler;
mod session;
mod store;
mod transaction;

#[cfg(test)]
mod tests;

pub use classifier::{Verdict, classify};
pub use coupler::CallCoupler;
pub use session::SessionTracker;
pub use store::TransactionStore;
pub use transaction::{
    Callback, CallbackOutcomes, HeaderSide, Transaction, UNKNOWN_CLIENT,
};

use crate::filter::FilterChain;
use crate::record::{Direction, Record, RecordKind, ReqEnd, SessionId, Xid};
use crate::report::{StatsAggregator, Summary, TransactionReport};

pub struct Engine {
    sessions: SessionTracker,
    store: TransactionStore,
    calls: CallCoupler,
    filters: FilterChain,
    stats: StatsAggregator,
}

impl Engine {
    pub fn new(filters: FilterChain) -> Self {
        Self {
            sessions: SessionTracker::default(),
            store: TransactionStore::default(),
            calls: CallCoupler::default(),
            filters,
            stats: StatsAggregator::default(),
        }
    }

    /// Apply one record. Returns a report when it ends a transaction that
    /// passes every filter.
    pub fn process(&mut self, record: &Record) -> Option<TransactionReport> {
        if record.direction != Direction::Client {
            return None;
        }

        let session = record.session;

        match &record.kind {
            RecordKind::SessionOpen { client } => {
                self.sessions.open(session, client);
                tracing::trace!(%session, client = %client, "session opened");
            }
            RecordKind::SessionClose => self.close_session(session),
            RecordKind::ReqStart { client, xid } => self.begin(session, *xid, client),
            RecordKind::ReqEnd(end) => return self.complete(end),
            kind => self.attribute(session, kind),
        }

        None
    }

    /// Forget the session's address. An open transaction stays put: piped
    /// requests close the connection before their `ReqEnd` is written.
    fn close_session(&mut self, session: SessionId) {
        let client = self.sessions.close(session);
        if let Some(xid) = self.store.current(session) {
            tracing::trace!(%session, %xid, "session closed before its transaction ended");
        }
        tracing::trace!(%session, client = %client, "session closed");
    }

    fn begin(&mut self, session: SessionId, xid: Xid, observed_client: &str) {
        let session_client = self.sessions.client_address(session);
        let superseded = self
            .store
            .begin(session, xid, observed_client, session_client);

        for tx in superseded {
            self.calls.clear(tx.xid);
            self.stats.record_superseded();
            tracing::warn!(
                %session,
                superseded = %tx.xid,
                xid = %xid,
                "transaction started before the previous one ended; discarding the previous one"
            );
        }
    }

    /// Fold a mid-transaction record into the session's current transaction.
    fn attribute(&mut self, session: SessionId, kind: &RecordKind) {
        let Some(xid) = self.store.current(session) else {
            tracing::debug!(%session, "record for a session with no open transaction");
            return;
        };

        match kind {
            RecordKind::VclCall { callback } => {
                let parsed = Callback::parse(callback);
                if parsed.is_none() {
                    tracing::debug!(%xid, callback = %callback, "untracked VCL callback");
                }
                self.calls.call_start(xid, parsed);
                return;
            }
            RecordKind::VclReturn { value } => {
                if self.calls.call_return(&mut self.store, xid, value).is_none() {
                    tracing::debug!(%xid, value = %value, "VCL return without a pending call");
                }
                return;
            }
            RecordKind::RxHeader { name, value } => {
                self.store
                    .append_header(xid, HeaderSide::Request, name, value);
                return;
            }
            RecordKind::TxHeader { name, value } => {
                self.store
                    .append_header(xid, HeaderSide::Response, name, value);
                return;
            }
            _ => {}
        }

        let Some(tx) = self.store.get_mut(xid) else {
            return;
        };

        match kind {
            RecordKind::RxRequest { method } => tx.method = Some(method.clone()),
            RecordKind::RxUrl { url } => tx.url = Some(url.clone()),
            RecordKind::RxProtocol { version } => tx.protocol = Some(version.clone()),
            RecordKind::Hit { object } => tx.hit_object = Some(*object),
            RecordKind::TxStatus { code } => tx.status_code = Some(*code),
            RecordKind::TxResponse { reason } => tx.status_reason = Some(reason.clone()),
            RecordKind::TxProtocol { version } => tx.response_protocol = Some(version.clone()),
            RecordKind::Debug { text } => tx.append_debug(text),
            _ => {}
        }
    }

    fn complete(&mut self, end: &ReqEnd) -> Option<TransactionReport> {
        self.stats.record_end();
        self.calls.clear(end.xid);

        let Some(tx) = self.store.end(end.xid) else {
            tracing::debug!(xid = %end.xid, "end of a transaction that was never started");
            return None;
        };

        let report = TransactionReport::new(tx, end);
        self.stats.record_completed(&report);

        if let Some(filter) = self.filters.first_rejection(&report) {
            tracing::debug!(xid = %report.xid, %filter, "transaction filtered out");
            return None;
        }

        self.stats.record_reported();
        Some(report)
    }

    /// Transactions counted so far, reported or not.
    pub fn total_requests(&self) -> u64 {
        self.stats.total()
    }

    pub fn transaction(&self, xid: Xid) -> Option<&Transaction> {
        self.store.get(xid)
    }

    pub fn current_transaction(&self, session: SessionId) -> Option<Xid> {
        self.store.current(session)
    }

    pub fn pending_call(&self, xid: Xid) -> Option<Callback> {
        self.calls.pending(xid)
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn open_transactions(&self) -> usize {
        self.store.len()
    }

    pub fn pending_calls(&self) -> usize {
        self.calls.len()
    }

    pub fn summary(&self) -> Summary {
        self.stats.snapshot()
    }

    /// Consume the engine. Transactions still open are dropped.
    pub fn finish(self) -> Summary {
        if !self.store.is_empty() {
            tracing::debug!(
                open = self.store.len(),
                "stream ended with open transactions"
            );
        }
        self.stats.snapshot()
    }
}
