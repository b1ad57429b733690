use crate::errors::ClientError;
use crate::models::session::Session;

use super::kv::KeyValueStore;

/// Storage keys for the persisted session. Names are part of the durable
/// contract — changing them orphans existing sessions.
pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_USER_EMAIL: &str = "userEmail";

/// Persists and restores the session against a durable key-value store.
///
/// Restore is all-or-nothing: a session only exists when all three keys are
/// present. A partial set (interrupted save, manual tampering) restores as
/// no session at all.
pub struct SessionStore {
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_session", &self.store.get(KEY_AUTH_TOKEN).is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Restore a previously saved session, or `None` if any key is missing.
    pub fn restore(&self) -> Option<Session> {
        let token = self.store.get(KEY_AUTH_TOKEN)?;
        let user_id = self.store.get(KEY_USER_ID)?;
        let user_email = self.store.get(KEY_USER_EMAIL)?;
        Some(Session {
            token,
            user_id,
            user_email,
        })
    }

    /// Write all three session keys.
    pub fn save(&mut self, session: &Session) -> Result<(), ClientError> {
        self.store.set(KEY_AUTH_TOKEN, &session.token)?;
        self.store.set(KEY_USER_ID, &session.user_id)?;
        self.store.set(KEY_USER_EMAIL, &session.user_email)?;
        Ok(())
    }

    /// Remove all three session keys.
    pub fn clear(&mut self) -> Result<(), ClientError> {
        self.store.remove(KEY_AUTH_TOKEN)?;
        self.store.remove(KEY_USER_ID)?;
        self.store.remove(KEY_USER_EMAIL)?;
        Ok(())
    }
}
