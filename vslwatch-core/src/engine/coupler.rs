use crate::engine::store::TransactionStore;
use crate::engine::transaction::Callback;
use crate::record::Xid;
use ahash::AHashMap;

/// Pairs `VCL_call` with the `VCL_return` that follows it.
#[derive(Debug, Default)]
pub struct CallCoupler {
    pending: AHashMap<Xid, Callback>,
}

impl CallCoupler {
    /// Mark `callback` as in flight for `xid`. A later call replaces an
    /// unanswered one; `None` (a callback we do not track) clears it.
    pub fn call_start(&mut self, xid: Xid, callback: Option<Callback>) {
        match callback {
            Some(cb) => {
                self.pending.insert(xid, cb);
            }
            None => {
                self.pending.remove(&xid);
            }
        }
    }

    /// Store `value` as the outcome of the pending call, if there is one.
    pub fn call_return(
        &mut self,
        store: &mut TransactionStore,
        xid: Xid,
        value: &str,
    ) -> Option<Callback> {
        let callback = self.pending.remove(&xid)?;
        if let Some(tx) = store.get_mut(xid) {
            tx.callbacks.set(callback, value);
        }
        Some(callback)
    }

    pub fn pending(&self, xid: Xid) -> Option<Callback> {
        self.pending.get(&xid).copied()
    }

    pub fn clear(&mut self, xid: Xid) {
        self.pending.remove(&xid);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
