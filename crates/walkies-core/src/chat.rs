//! Chat domain model.
//!
//! Messages are append-only and immutable once created. Each poll cycle
//! replaces the transcript wholesale; the only client-side adjustment is a
//! stable sort by creation time so transcripts don't flicker between polls.

use crate::ids::{BookingId, MessageId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message within a booking's conversation.
///
/// The API is inconsistent about field names (`sender_id` vs `user_id`,
/// `content` vs `message`); both spellings are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    #[serde(default)]
    pub booking_id: Option<BookingId>,
    #[serde(alias = "user_id")]
    pub sender_id: UserId,
    #[serde(alias = "message")]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct NewChatMessage {
    pub booking_id: BookingId,
    pub content: String,
}

/// Sorts a transcript by creation time, oldest first.
///
/// The sort is stable, so messages sharing a timestamp keep the server's
/// relative order.
pub fn sort_transcript(messages: &mut [ChatMessage]) {
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}
