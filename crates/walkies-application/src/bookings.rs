//! Booking dashboards.
//!
//! [`BookingDesk`] holds the partitioned booking board for one signed-in role
//! and drives the lifecycle transitions. The server is authoritative for
//! state: every transition is a status update followed by a full refetch, and
//! a failed call leaves the cached board exactly as it was.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use walkies_core::booking::{Booking, BookingBoard, BookingDraft, BookingStatus};
use walkies_core::error::{Result, WalkiesError};
use walkies_core::gateway::BookingGateway;
use walkies_core::ids::BookingId;
use walkies_core::pet::Pet;
use walkies_core::user::Role;

/// Asks the user whether a booking should really be marked complete.
///
/// The CLI backs this with a terminal prompt; tests script the answer.
pub trait ConfirmCompletion: Send + Sync {
    fn confirm(&self, booking_id: &BookingId) -> bool;
}

pub struct BookingDesk {
    role: Role,
    gateway: Arc<dyn BookingGateway>,
    board: RwLock<BookingBoard>,
    refresh_count: AtomicU64,
}

impl BookingDesk {
    pub fn new(role: Role, gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            role,
            gateway,
            board: RwLock::new(BookingBoard::default()),
            refresh_count: AtomicU64::new(0),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// A copy of the current board.
    pub async fn board(&self) -> BookingBoard {
        self.board.read().await.clone()
    }

    /// Refetches the role-scoped booking list and repartitions the board.
    pub async fn refresh(&self) -> Result<()> {
        let bookings = self.gateway.bookings_for(self.role).await?;
        let next = BookingBoard::partition(bookings);
        tracing::debug!(
            pending = next.pending.len(),
            active = next.active.len(),
            history = next.history.len(),
            "Booking board refreshed"
        );
        *self.board.write().await = next;
        self.refresh_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Number of successful refreshes since construction. Each transition
    /// forces one, so this also counts applied lifecycle changes.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count.load(Ordering::SeqCst)
    }

    /// Resolves the draft against the owner's pets and submits it. Owner-only.
    pub async fn create(&self, draft: BookingDraft, pets: &[Pet]) -> Result<Booking> {
        self.require_role(Role::Owner, "create")?;
        let request = draft.resolve(pets)?;
        let created = self.gateway.create_booking(&request).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Accepts a pending request. Walker-only.
    pub async fn accept(&self, booking_id: &BookingId) -> Result<()> {
        self.require_role(Role::Walker, "accept")?;
        self.transition(booking_id, BookingStatus::Accepted).await
    }

    /// Rejects a pending request. Walker-only.
    pub async fn reject(&self, booking_id: &BookingId) -> Result<()> {
        self.require_role(Role::Walker, "reject")?;
        self.transition(booking_id, BookingStatus::Rejected).await
    }

    /// Marks an active walk complete. Owner-only, and gated behind an
    /// explicit confirmation; returns `Ok(false)` when the user declines.
    pub async fn complete(
        &self,
        booking_id: &BookingId,
        confirm: &dyn ConfirmCompletion,
    ) -> Result<bool> {
        self.require_role(Role::Owner, "complete")?;
        if !confirm.confirm(booking_id) {
            return Ok(false);
        }
        self.transition(booking_id, BookingStatus::Completed).await?;
        Ok(true)
    }

    fn require_role(&self, required: Role, action: &str) -> Result<()> {
        if self.role != required {
            return Err(WalkiesError::validation(format!(
                "Only a {} can {} a booking",
                required, action
            )));
        }
        Ok(())
    }

    async fn transition(&self, booking_id: &BookingId, status: BookingStatus) -> Result<()> {
        self.gateway.update_booking_status(booking_id, status).await?;
        self.refresh().await
    }
}
