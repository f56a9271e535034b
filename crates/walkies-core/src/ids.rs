//! Opaque identifier newtypes, one per entity.
//!
//! The marketplace API is inconsistent about identifier encoding: some
//! endpoints return UUIDs as strings, others return numeric ids. Each newtype
//! here accepts either a JSON string or a JSON number and canonicalises to a
//! string at the API boundary, so the rest of the client never coerces ids
//! ad hoc.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire form of an identifier: a string or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id! {
    /// Identifier of a registered user (owner or walker account).
    UserId
}

opaque_id! {
    /// Identifier of a pet belonging to an owner.
    PetId
}

opaque_id! {
    /// Identifier of a walker profile.
    WalkerId
}

opaque_id! {
    /// Identifier of a booking (a scheduled walk engagement).
    BookingId
}

opaque_id! {
    /// Identifier of a chat message.
    MessageId
}
