use crate::engine::transaction::UNKNOWN_CLIENT;
use crate::record::SessionId;
use ahash::AHashMap;

/// Client address per live session.
#[derive(Debug, Default)]
pub struct SessionTracker {
    clients: AHashMap<SessionId, Option<String>>,
}

impl SessionTracker {
    pub fn open(&mut self, session: SessionId, client: &str) {
        let client = (!client.is_empty()).then(|| client.to_string());
        self.clients.insert(session, client);
    }

    /// Forget the session, returning its address or [`UNKNOWN_CLIENT`].
    pub fn close(&mut self, session: SessionId) -> String {
        self.clients
            .remove(&session)
            .flatten()
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
    }

    pub fn client_address(&self, session: SessionId) -> Option<&str> {
        self.clients.get(&session)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
