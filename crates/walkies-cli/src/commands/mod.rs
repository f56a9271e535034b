//! Command implementations and the shared wiring behind them.

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use walkies_api::ApiClient;
use walkies_application::{ConfirmCompletion, SessionStore};
use walkies_core::ids::BookingId;
use walkies_core::session::Navigator;
use walkies_core::user::Role;
use walkies_infrastructure::TomlSessionVault;

pub mod bookings;
pub mod chat;
pub mod pets;
pub mod session;
pub mod walkers;

/// Everything a command needs: the session store and the API client that
/// reads its token from it.
pub struct AppContext {
    pub store: Arc<SessionStore>,
    pub api: ApiClient,
}

impl AppContext {
    pub async fn bootstrap() -> Result<Self> {
        let vault = TomlSessionVault::default_location()
            .context("Failed to locate the session file")?;
        let store = SessionStore::open(Arc::new(vault), Arc::new(TerminalNavigator)).await;
        let api = ApiClient::from_env(store.clone());
        tracing::debug!(
            base_url = %api.base_url(),
            authenticated = store.is_authenticated().await,
            "Client initialised"
        );
        Ok(Self { store, api })
    }

    /// The signed-in role, required by the role-scoped booking commands.
    pub async fn current_role(&self) -> Result<Role> {
        let user = self
            .store
            .user()
            .await
            .context("Not signed in. Run `walkies login` first")?;
        Ok(user.role)
    }
}

/// In a terminal there is no login page to route to; the redirect becomes a
/// hint about the command that replaces it.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn to_login(&self) {
        println!("Signed out. Run `walkies login <email> <password>` to sign in again.");
    }
}

/// Interactive confirmation prompt for marking a walk completed.
pub struct TerminalConfirm;

impl ConfirmCompletion for TerminalConfirm {
    fn confirm(&self, booking_id: &BookingId) -> bool {
        print!("Mark booking {} as completed? [y/N] ", booking_id);
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

/// Non-interactive confirmation for `--yes`.
pub struct AlwaysConfirm;

impl ConfirmCompletion for AlwaysConfirm {
    fn confirm(&self, _booking_id: &BookingId) -> bool {
        true
    }
}
