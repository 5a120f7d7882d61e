use crate::engine::transaction::{HeaderSide, Transaction, UNKNOWN_CLIENT};
use crate::record::{SessionId, Xid};
use ahash::AHashMap;

/// Open transactions, plus which one each session is currently working on.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: AHashMap<Xid, Transaction>,
    current: AHashMap<SessionId, Xid>,
}

impl TransactionStore {
    /// Open `xid` on `session`.
    ///
    /// The client address is the observed one, else the session's, else
    /// [`UNKNOWN_CLIENT`]. Any transaction this replaces (the session's previous
    /// open one, or an open one reusing `xid`) is released and returned.
    pub fn begin(
        &mut self,
        session: SessionId,
        xid: Xid,
        observed_client: &str,
        session_client: Option<&str>,
    ) -> Vec<Transaction> {
        let client = if !observed_client.is_empty() {
            observed_client
        } else {
            session_client.unwrap_or(UNKNOWN_CLIENT)
        };

        let mut superseded = Vec::new();

        if let Some(previous) = self.current.insert(session, xid) {
            if let Some(tx) = self.transactions.remove(&previous) {
                superseded.push(tx);
            }
        }

        let replaced = self
            .transactions
            .insert(xid, Transaction::new(xid, session, client));

        if let Some(tx) = replaced {
            if tx.session != session && self.current.get(&tx.session) == Some(&xid) {
                self.current.remove(&tx.session);
            }
            superseded.push(tx);
        }

        superseded
    }

    pub fn current(&self, session: SessionId) -> Option<Xid> {
        self.current.get(&session).copied()
    }

    pub fn get(&self, xid: Xid) -> Option<&Transaction> {
        self.transactions.get(&xid)
    }

    pub fn get_mut(&mut self, xid: Xid) -> Option<&mut Transaction> {
        self.transactions.get_mut(&xid)
    }

    pub fn append_header(&mut self, xid: Xid, side: HeaderSide, name: &str, value: &str) {
        if let Some(tx) = self.transactions.get_mut(&xid) {
            tx.append_header(side, name, value);
        }
    }

    /// Remove `xid` and hand back everything recorded for it.
    pub fn end(&mut self, xid: Xid) -> Option<Transaction> {
        let tx = self.transactions.remove(&xid)?;
        if self.current.get(&tx.session) == Some(&xid) {
            self.current.remove(&tx.session);
        }
        Some(tx)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
