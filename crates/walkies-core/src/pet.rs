//! Pet domain model.

use crate::error::{Result, WalkiesError};
use crate::ids::PetId;
use serde::{Deserialize, Serialize};

/// A pet registered by an owner.
///
/// Pets are created via form submission and never edited or deleted from the
/// client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for `POST /api/pets`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewPet {
    /// Name and breed are required before a request is issued.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WalkiesError::validation("pet name is required"));
        }
        if self.breed.trim().is_empty() {
            return Err(WalkiesError::validation("pet breed is required"));
        }
        Ok(())
    }
}
