//! The session store: single source of truth for "who is logged in".
//!
//! State lives in memory behind a `RwLock`; every mutation writes through to
//! the injected [`SessionVault`], and the vault is authoritative on startup.
//! Consumers hold the store by `Arc` and read the token through the
//! [`TokenSource`] implementation; only `login`/`logout` mutate it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use walkies_core::session::{Navigator, Session, SessionVault, TokenSource};
use walkies_core::user::UserProfile;

pub struct SessionStore {
    /// Current in-memory session
    session: RwLock<Session>,
    /// Durable write-through storage
    vault: Arc<dyn SessionVault>,
    /// Navigation side effects (redirect to login on logout)
    navigator: Arc<dyn Navigator>,
}

impl SessionStore {
    /// Opens the store, restoring any persisted session.
    ///
    /// A missing record starts the store logged out; an unreadable or corrupt
    /// record degrades to logged out as well. Opening never fails.
    pub async fn open(vault: Arc<dyn SessionVault>, navigator: Arc<dyn Navigator>) -> Arc<Self> {
        let initial = match vault.load().await {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(e) => {
                tracing::warn!("Persisted session unreadable, starting logged out: {}", e);
                Session::default()
            }
        };

        Arc::new(Self {
            session: RwLock::new(initial),
            vault,
            navigator,
        })
    }

    /// Records a fresh login.
    ///
    /// The caller has already validated credentials against the API and
    /// supplies the resulting token; no server round trip happens here. The
    /// profile may be omitted, leaving a token-only identity.
    pub async fn login(&self, token: impl Into<String>, user: Option<UserProfile>) {
        let next = Session {
            token: Some(token.into()),
            user,
        };
        {
            let mut session = self.session.write().await;
            *session = next.clone();
        }
        if let Err(e) = self.vault.store(&next).await {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }

    /// Clears the session from memory and durable storage, then navigates to
    /// the login view. The navigation fires exactly once per call, whether or
    /// not the vault cooperates.
    pub async fn logout(&self) {
        {
            let mut session = self.session.write().await;
            *session = Session::default();
        }
        if let Err(e) = self.vault.clear().await {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
        self.navigator.to_login();
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.session.read().await.user.clone()
    }

    /// A copy of the whole current session.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }
}

#[async_trait]
impl TokenSource for SessionStore {
    async fn token(&self) -> Option<String> {
        self.session.read().await.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use walkies_core::error::{Result, WalkiesError};
    use walkies_core::ids::UserId;
    use walkies_core::user::Role;

    /// In-memory vault; can be primed with a record or rigged to fail.
    #[derive(Default)]
    struct MemoryVault {
        record: Mutex<Option<Session>>,
        fail_load: bool,
    }

    #[async_trait]
    impl SessionVault for MemoryVault {
        async fn load(&self) -> Result<Option<Session>> {
            if self.fail_load {
                return Err(WalkiesError::Serialization {
                    format: "TOML".to_string(),
                    message: "corrupt record".to_string(),
                });
            }
            Ok(self.record.lock().unwrap().clone())
        }

        async fn store(&self, session: &Session) -> Result<()> {
            *self.record.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingNavigator {
        to_login_calls: AtomicUsize,
    }

    impl Navigator for CountingNavigator {
        fn to_login(&self) {
            self.to_login_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::from("u-1"),
            email: "ana@example.com".to_string(),
            full_name: "Ana Torres".to_string(),
            role: Role::Owner,
        }
    }

    #[tokio::test]
    async fn test_open_restores_persisted_session() {
        let vault = Arc::new(MemoryVault::default());
        let persisted = Session {
            token: Some("tok-1".to_string()),
            user: Some(profile()),
        };
        *vault.record.lock().unwrap() = Some(persisted.clone());

        let store = SessionStore::open(vault, Arc::new(CountingNavigator::default())).await;

        assert!(store.is_authenticated().await);
        assert_eq!(store.snapshot().await, persisted);
    }

    #[tokio::test]
    async fn test_open_degrades_corrupt_record_to_logged_out() {
        let vault = Arc::new(MemoryVault {
            record: Mutex::new(None),
            fail_load: true,
        });

        let store = SessionStore::open(vault, Arc::new(CountingNavigator::default())).await;

        assert!(!store.is_authenticated().await);
        assert!(store.token().await.is_none());
    }

    #[tokio::test]
    async fn test_login_writes_through_to_vault() {
        let vault = Arc::new(MemoryVault::default());
        let store =
            SessionStore::open(vault.clone(), Arc::new(CountingNavigator::default())).await;

        store.login("tok-9", Some(profile())).await;

        assert_eq!(store.token().await.as_deref(), Some("tok-9"));
        let persisted = vault.record.lock().unwrap().clone().unwrap();
        assert_eq!(persisted.token.as_deref(), Some("tok-9"));
        assert_eq!(persisted.user, Some(profile()));
    }

    #[tokio::test]
    async fn test_login_without_profile_is_token_only() {
        let vault = Arc::new(MemoryVault::default());
        let store =
            SessionStore::open(vault, Arc::new(CountingNavigator::default())).await;

        store.login("tok-2", None).await;

        assert!(store.is_authenticated().await);
        assert!(store.user().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_navigates_once() {
        let vault = Arc::new(MemoryVault::default());
        let navigator = Arc::new(CountingNavigator::default());
        let store = SessionStore::open(vault.clone(), navigator.clone()).await;
        store.login("tok-1", Some(profile())).await;

        store.logout().await;

        assert!(!store.is_authenticated().await);
        assert!(store.user().await.is_none());
        assert!(vault.record.lock().unwrap().is_none());
        assert_eq!(navigator.to_login_calls.load(Ordering::SeqCst), 1);
    }
}
