use serde::{Deserialize, Serialize};

/// An authenticated user session.
///
/// Created on successful login or restored from durable storage at startup,
/// replaced wholesale on re-login, destroyed on logout. Either all three
/// fields exist or the session does not — there is no partial session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the auth service.
    pub token: String,

    /// Server-side user identifier, attached to every entry and filter.
    pub user_id: String,

    /// Email the user logged in with (display only).
    pub user_email: String,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        user_id: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            user_email: user_email.into(),
        }
    }
}
