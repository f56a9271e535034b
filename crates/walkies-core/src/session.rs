//! Session model and the ports around it.
//!
//! The session is the single source of truth for "who is logged in". Durable
//! persistence and navigation are behind traits so the store can be driven by
//! any front end and tested without a filesystem.

use crate::error::Result;
use crate::user::UserProfile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The authenticated session: a bearer token and the profile it belongs to.
///
/// `user` may be absent even when a token is present; the identity is then
/// token-only until the next login replaces the whole session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Derived purely from the presence of a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Durable storage for the session, surviving restarts.
///
/// The store writes through on every mutation and treats the vault as
/// authoritative on startup.
#[async_trait]
pub trait SessionVault: Send + Sync {
    /// Loads the persisted session.
    ///
    /// Returns `Ok(None)` when nothing has been persisted. An unreadable or
    /// corrupt record is an error; the caller decides how to degrade.
    async fn load(&self) -> Result<Option<Session>>;

    /// Persists the given session, replacing any previous record.
    async fn store(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session, if any.
    async fn clear(&self) -> Result<()>;
}

/// Navigation side effects the session store can trigger.
///
/// Logging out redirects to the login view; that is the only navigation the
/// store itself performs.
pub trait Navigator: Send + Sync {
    fn to_login(&self);
}

/// Read-only access to the current bearer token.
///
/// Every API call site reads the token through this trait; only the session
/// store mutates it, via `login`/`logout`.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Option<String>;
}
