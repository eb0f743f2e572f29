use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

/// A logged-in user's session: who they are and the per-user access key
/// the profile service issued at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub access_key: String,
}

/// Active sessions keyed by cookie id
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session and return the cookie id to hand to the client
    pub fn create(&self, username: impl Into<String>, access_key: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session {
            username: username.into(),
            access_key: access_key.into(),
        };
        log::debug!("opening session for {}", session.username);
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(id.clone(), session);
        id
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(id)
            .cloned()
    }

    /// Close a session, returning it if it was open
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_round_trips() {
        let registry = SessionRegistry::new();
        let id = registry.create("alice", "key-123");
        let session = registry.get(&id).unwrap();
        assert_eq!(session.username, "alice");
        assert_eq!(session.access_key, "key-123");
    }

    #[test]
    fn ids_are_unique_per_session() {
        let registry = SessionRegistry::new();
        let first = registry.create("alice", "k");
        let second = registry.create("alice", "k");
        assert_ne!(first, second);
    }

    #[test]
    fn remove_closes_the_session() {
        let registry = SessionRegistry::new();
        let id = registry.create("alice", "k");
        assert!(registry.remove(&id).is_some());
        assert!(registry.get(&id).is_none());
        assert!(registry.remove(&id).is_none());
    }
}
