//! TOML-backed session vault.
//!
//! Persists the login session as a single TOML file so a new process starts
//! where the last one left off. Persistence goes through a versionless record
//! DTO rather than serializing the domain type directly, keeping the file
//! format decoupled from the domain model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkies_core::error::Result;
use walkies_core::ids::UserId;
use walkies_core::session::{Session, SessionVault};
use walkies_core::user::UserProfile;

/// On-disk shape of a persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    id: String,
    email: String,
    full_name: String,
    role: String,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            user: session.user.as_ref().map(|user| UserRecord {
                id: user.id.as_str().to_string(),
                email: user.email.clone(),
                full_name: user.full_name.clone(),
                role: user.role.to_string(),
            }),
        }
    }
}

impl SessionRecord {
    fn into_session(self) -> Result<Session> {
        let user = match self.user {
            Some(record) => Some(UserProfile {
                id: UserId::from(record.id),
                email: record.email,
                full_name: record.full_name,
                role: record.role.parse()?,
            }),
            None => None,
        };
        Ok(Session {
            token: self.token,
            user,
        })
    }
}

/// Stores the session at a fixed file path, `~/.walkies/session.toml` by
/// default.
pub struct TomlSessionVault {
    session_path: PathBuf,
}

impl TomlSessionVault {
    /// Creates a vault storing its session file under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            session_path: base_dir.as_ref().join("session.toml"),
        }
    }

    /// Creates a vault at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_location() -> Result<Self> {
        Ok(Self {
            session_path: crate::paths::WalkiesPaths::session_file()?,
        })
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

#[async_trait]
impl SessionVault for TomlSessionVault {
    async fn load(&self) -> Result<Option<Session>> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.session_path)?;
        let record: SessionRecord = toml::from_str(&content)?;
        Ok(Some(record.into_session()?))
    }

    async fn store(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let record = SessionRecord::from(session);
        let content = toml::to_string_pretty(&record)?;
        fs::write(&self.session_path, content)?;
        tracing::debug!(path = %self.session_path.display(), "Session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use walkies_core::user::Role;

    fn session_with_user() -> Session {
        Session {
            token: Some("tok-42".to_string()),
            user: Some(UserProfile {
                id: UserId::from("u-7"),
                email: "ana@example.com".to_string(),
                full_name: "Ana Torres".to_string(),
                role: Role::Walker,
            }),
        }
    }

    #[tokio::test]
    async fn test_store_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let vault = TomlSessionVault::new(temp_dir.path());

        let session = session_with_user();
        vault.store(&session).await.unwrap();

        let loaded = vault.load().await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let vault = TomlSessionVault::new(temp_dir.path());

        assert_eq!(vault.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let vault = TomlSessionVault::new(temp_dir.path());
        fs::write(vault.session_path(), "not valid toml [[[").unwrap();

        assert!(vault.load().await.is_err());
    }

    #[tokio::test]
    async fn test_token_only_session_omits_user_table() {
        let temp_dir = TempDir::new().unwrap();
        let vault = TomlSessionVault::new(temp_dir.path());
        let session = Session {
            token: Some("tok-1".to_string()),
            user: None,
        };

        vault.store(&session).await.unwrap();

        let content = fs::read_to_string(vault.session_path()).unwrap();
        assert!(content.contains("token"));
        assert!(!content.contains("[user]"));
        assert_eq!(vault.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_clear_removes_file_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let vault = TomlSessionVault::new(temp_dir.path());
        vault.store(&session_with_user()).await.unwrap();

        vault.clear().await.unwrap();
        assert!(!vault.session_path().exists());

        // Clearing an already-empty vault is fine.
        vault.clear().await.unwrap();
        assert_eq!(vault.load().await.unwrap(), None);
    }
}
