//! Booking endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use walkies_core::booking::{Booking, BookingStatus, NewBooking};
use walkies_core::error::Result;
use walkies_core::gateway::BookingGateway;
use walkies_core::ids::BookingId;
use walkies_core::user::Role;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BookingsEnvelope {
    Wrapped { bookings: Vec<Booking> },
    Bare(Vec<Booking>),
}

impl BookingsEnvelope {
    fn into_inner(self) -> Vec<Booking> {
        match self {
            BookingsEnvelope::Wrapped { bookings } => bookings,
            BookingsEnvelope::Bare(bookings) => bookings,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: BookingStatus,
}

#[async_trait]
impl BookingGateway for ApiClient {
    async fn bookings_for(&self, role: Role) -> Result<Vec<Booking>> {
        let path = match role {
            Role::Owner => "/api/bookings/owner",
            Role::Walker => "/api/bookings/walker",
        };
        let request = self.get(path).await;
        let envelope: BookingsEnvelope = self.execute(request).await?;
        Ok(envelope.into_inner())
    }

    async fn create_booking(&self, new_booking: &NewBooking) -> Result<Booking> {
        let request = self.post("/api/bookings").await.json(new_booking);
        self.execute(request).await
    }

    async fn update_booking_status(
        &self,
        booking_id: &BookingId,
        status: BookingStatus,
    ) -> Result<Booking> {
        let request = self
            .put(&format!("/api/bookings/{}", booking_id))
            .await
            .json(&StatusUpdate { status });
        self.execute(request).await
    }
}
