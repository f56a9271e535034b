//! Booking domain model and the pure pieces of the booking lifecycle.
//!
//! Status transitions are externally authoritative: the client only ever
//! requests a transition and re-fetches the list, it never computes the next
//! status itself.

use crate::error::{Result, WalkiesError};
use crate::ids::{BookingId, PetId, WalkerId};
use crate::pet::Pet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled walk engagement between an owner's pet and a walker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub walker_id: WalkerId,
    pub pet_id: PetId,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub pet_name: Option<String>,
    #[serde(default)]
    pub walker_name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub duration_hours: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

/// Payload for `POST /api/bookings`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBooking {
    pub walker_id: WalkerId,
    pub pet_id: PetId,
    pub start_time: DateTime<Utc>,
    pub duration_hours: f64,
}

/// An in-progress booking request, as assembled by the owner's booking form.
///
/// Everything is optional until submission; `resolve` turns the draft into a
/// validated `NewBooking` or explains what is missing.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub walker_id: Option<WalkerId>,
    pub pet_id: Option<PetId>,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
}

impl BookingDraft {
    /// Validates the draft against the owner's pet roster.
    ///
    /// If no pet was explicitly chosen but the roster is non-empty, the first
    /// pet is selected on the owner's behalf. This is a deliberate usability
    /// accommodation, not an error path.
    pub fn resolve(mut self, pets: &[Pet]) -> Result<NewBooking> {
        if self.pet_id.is_none()
            && let Some(first) = pets.first()
        {
            self.pet_id = Some(first.id.clone());
        }

        let walker_id = self
            .walker_id
            .ok_or_else(|| WalkiesError::validation("no walker selected"))?;
        let pet_id = self
            .pet_id
            .ok_or_else(|| WalkiesError::validation("no pet selected"))?;
        let start_time = self
            .start_time
            .ok_or_else(|| WalkiesError::validation("start time is required"))?;
        let duration_hours = self
            .duration_hours
            .ok_or_else(|| WalkiesError::validation("duration is required"))?;

        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(WalkiesError::validation("duration must be positive"));
        }

        Ok(NewBooking {
            walker_id,
            pet_id,
            start_time,
            duration_hours,
        })
    }
}

/// Bookings partitioned by status for display.
///
/// `pending` holds requests awaiting a walker's decision, `active` holds
/// accepted walks, `history` holds completed and rejected ones. The three
/// partitions are disjoint and together contain every input booking, in the
/// order the server returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingBoard {
    pub pending: Vec<Booking>,
    pub active: Vec<Booking>,
    pub history: Vec<Booking>,
}

impl BookingBoard {
    /// Partitions a booking list by exact status match.
    pub fn partition(bookings: Vec<Booking>) -> Self {
        let mut board = Self::default();
        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => board.pending.push(booking),
                BookingStatus::Accepted => board.active.push(booking),
                BookingStatus::Rejected | BookingStatus::Completed => {
                    board.history.push(booking)
                }
            }
        }
        board
    }

    /// Total number of bookings across all partitions.
    pub fn len(&self) -> usize {
        self.pending.len() + self.active.len() + self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::from(id),
            walker_id: WalkerId::from("w-1"),
            pet_id: PetId::from("p-1"),
            owner_name: None,
            pet_name: Some("Rocky".to_string()),
            walker_name: Some("Carlos".to_string()),
            start_time: "2025-06-01T10:00:00Z".parse().unwrap(),
            duration_hours: 1.5,
            status,
            total_cost: Some(30.0),
        }
    }

    fn sample_pet(id: &str, name: &str) -> Pet {
        Pet {
            id: PetId::from(id),
            name: name.to_string(),
            breed: "Corgi".to_string(),
            age: None,
            notes: None,
        }
    }

    #[test]
    fn test_partition_is_disjoint_and_exhaustive() {
        let statuses = [
            BookingStatus::Pending,
            BookingStatus::Accepted,
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Pending,
            BookingStatus::Completed,
        ];
        let bookings: Vec<Booking> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| sample_booking(&format!("b-{}", i), *status))
            .collect();

        let board = BookingBoard::partition(bookings.clone());

        assert_eq!(board.len(), bookings.len());
        assert!(board.pending.iter().all(|b| b.status == BookingStatus::Pending));
        assert!(board.active.iter().all(|b| b.status == BookingStatus::Accepted));
        assert!(board.history.iter().all(|b| {
            b.status == BookingStatus::Rejected || b.status == BookingStatus::Completed
        }));

        // No booking appears in more than one partition
        let mut seen: Vec<&str> = board
            .pending
            .iter()
            .chain(board.active.iter())
            .chain(board.history.iter())
            .map(|b| b.id.as_str())
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), bookings.len());
    }

    #[test]
    fn test_partition_of_empty_input() {
        let board = BookingBoard::partition(Vec::new());
        assert!(board.pending.is_empty());
        assert!(board.active.is_empty());
        assert!(board.history.is_empty());
        assert!(board.is_empty());
    }

    #[test]
    fn test_partition_preserves_server_order() {
        let bookings = vec![
            sample_booking("b-2", BookingStatus::Pending),
            sample_booking("b-1", BookingStatus::Pending),
        ];
        let board = BookingBoard::partition(bookings);
        assert_eq!(board.pending[0].id.as_str(), "b-2");
        assert_eq!(board.pending[1].id.as_str(), "b-1");
    }

    #[test]
    fn test_draft_falls_back_to_first_pet() {
        let draft = BookingDraft {
            walker_id: Some(WalkerId::from("w-1")),
            pet_id: None,
            start_time: Some("2025-06-01T10:00:00Z".parse().unwrap()),
            duration_hours: Some(2.0),
        };
        let pets = vec![sample_pet("p-7", "Luna"), sample_pet("p-8", "Rocky")];

        let request = draft.resolve(&pets).unwrap();
        assert_eq!(request.pet_id, PetId::from("p-7"));
    }

    #[test]
    fn test_draft_explicit_pet_wins_over_fallback() {
        let draft = BookingDraft {
            walker_id: Some(WalkerId::from("w-1")),
            pet_id: Some(PetId::from("p-8")),
            start_time: Some("2025-06-01T10:00:00Z".parse().unwrap()),
            duration_hours: Some(1.0),
        };
        let pets = vec![sample_pet("p-7", "Luna"), sample_pet("p-8", "Rocky")];

        let request = draft.resolve(&pets).unwrap();
        assert_eq!(request.pet_id, PetId::from("p-8"));
    }

    #[test]
    fn test_draft_without_pets_fails_validation() {
        let draft = BookingDraft {
            walker_id: Some(WalkerId::from("w-1")),
            pet_id: None,
            start_time: Some("2025-06-01T10:00:00Z".parse().unwrap()),
            duration_hours: Some(1.0),
        };
        let err = draft.resolve(&[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_draft_rejects_non_positive_duration() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let draft = BookingDraft {
                walker_id: Some(WalkerId::from("w-1")),
                pet_id: Some(PetId::from("p-1")),
                start_time: Some("2025-06-01T10:00:00Z".parse().unwrap()),
                duration_hours: Some(bad),
            };
            assert!(draft.resolve(&[]).is_err());
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Completed).unwrap(),
            "\"completed\""
        );
        let status: BookingStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, BookingStatus::Pending);
    }
}
