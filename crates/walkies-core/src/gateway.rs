//! Gateway ports: the service contracts the HTTP client fulfils.
//!
//! These traits form the boundary between the client's core logic and the
//! remote REST API, so use cases can be tested against in-memory fakes.

use crate::booking::{Booking, BookingStatus, NewBooking};
use crate::chat::{ChatMessage, NewChatMessage};
use crate::error::Result;
use crate::ids::{BookingId, WalkerId};
use crate::pet::{NewPet, Pet};
use crate::user::{NewUser, Role, UserProfile};
use crate::walker::{WalkerProfile, WalkerSummary};
use async_trait::async_trait;

/// Successful login result: the issued token and, when the API returns one,
/// the authenticated profile.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub user: Option<UserProfile>,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /api/auth/login`. Credential validation happens server-side;
    /// the caller feeds the resulting token into the session store.
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome>;

    /// `POST /api/users`.
    async fn register(&self, new_user: &NewUser) -> Result<UserProfile>;
}

#[async_trait]
pub trait PetGateway: Send + Sync {
    async fn list_pets(&self) -> Result<Vec<Pet>>;

    async fn create_pet(&self, new_pet: &NewPet) -> Result<Pet>;
}

#[async_trait]
pub trait WalkerGateway: Send + Sync {
    /// `GET /api/walkers/nearby?lat&lng`.
    async fn nearby_walkers(&self, lat: f64, lng: f64) -> Result<Vec<WalkerSummary>>;

    async fn walker_profile(&self, walker_id: &WalkerId) -> Result<WalkerProfile>;

    async fn update_walker_profile(
        &self,
        walker_id: &WalkerId,
        profile: &WalkerProfile,
    ) -> Result<WalkerProfile>;
}

#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Fetches the booking list scoped to the given role (owners and walkers
    /// hit different endpoints).
    async fn bookings_for(&self, role: Role) -> Result<Vec<Booking>>;

    async fn create_booking(&self, request: &NewBooking) -> Result<Booking>;

    /// Requests a status transition. The server is authoritative; callers
    /// re-fetch the list afterwards instead of updating locally.
    async fn update_booking_status(
        &self,
        booking_id: &BookingId,
        status: BookingStatus,
    ) -> Result<Booking>;
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// `GET /api/chat/:bookingId` — the full transcript for one booking.
    async fn fetch_messages(&self, booking_id: &BookingId) -> Result<Vec<ChatMessage>>;

    /// `POST /api/chat`.
    async fn send_message(&self, message: &NewChatMessage) -> Result<ChatMessage>;
}
