//! Pet endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use serde::Deserialize;
use walkies_core::error::Result;
use walkies_core::gateway::PetGateway;
use walkies_core::pet::{NewPet, Pet};

/// The API answers either `{"pets": [...]}` or a bare array depending on the
/// deployment; both must decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PetsEnvelope {
    Wrapped { pets: Vec<Pet> },
    Bare(Vec<Pet>),
}

impl PetsEnvelope {
    fn into_inner(self) -> Vec<Pet> {
        match self {
            PetsEnvelope::Wrapped { pets } => pets,
            PetsEnvelope::Bare(pets) => pets,
        }
    }
}

#[async_trait]
impl PetGateway for ApiClient {
    async fn list_pets(&self) -> Result<Vec<Pet>> {
        let request = self.get("/api/pets").await;
        let envelope: PetsEnvelope = self.execute(request).await?;
        Ok(envelope.into_inner())
    }

    async fn create_pet(&self, new_pet: &NewPet) -> Result<Pet> {
        new_pet.validate()?;
        let request = self.post("/api/pets").await.json(new_pet);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let wrapped: PetsEnvelope =
            serde_json::from_str(r#"{"pets": [{"id": 1, "name": "Luna"}]}"#).unwrap();
        assert_eq!(wrapped.into_inner().len(), 1);

        let bare: PetsEnvelope =
            serde_json::from_str(r#"[{"id": "p-1", "name": "Rocky", "breed": "Pug"}]"#).unwrap();
        let pets = bare.into_inner();
        assert_eq!(pets[0].breed, "Pug");
    }

    #[test]
    fn test_empty_bare_array() {
        let empty: PetsEnvelope = serde_json::from_str("[]").unwrap();
        assert!(empty.into_inner().is_empty());
    }
}
