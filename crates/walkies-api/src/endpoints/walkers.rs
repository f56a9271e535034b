//! Walker search and profile endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use serde::Deserialize;
use walkies_core::error::Result;
use walkies_core::gateway::WalkerGateway;
use walkies_core::ids::WalkerId;
use walkies_core::walker::{WalkerProfile, WalkerSummary};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WalkersEnvelope {
    Wrapped { walkers: Vec<WalkerSummary> },
    Bare(Vec<WalkerSummary>),
}

impl WalkersEnvelope {
    fn into_inner(self) -> Vec<WalkerSummary> {
        match self {
            WalkersEnvelope::Wrapped { walkers } => walkers,
            WalkersEnvelope::Bare(walkers) => walkers,
        }
    }
}

#[async_trait]
impl WalkerGateway for ApiClient {
    async fn nearby_walkers(&self, lat: f64, lng: f64) -> Result<Vec<WalkerSummary>> {
        let request = self
            .get("/api/walkers/nearby")
            .await
            .query(&[("lat", lat), ("lng", lng)]);
        let envelope: WalkersEnvelope = self.execute(request).await?;
        Ok(envelope.into_inner())
    }

    async fn walker_profile(&self, walker_id: &WalkerId) -> Result<WalkerProfile> {
        let request = self
            .get(&format!("/api/walkers/profile/{}", walker_id))
            .await;
        self.execute(request).await
    }

    async fn update_walker_profile(
        &self,
        walker_id: &WalkerId,
        profile: &WalkerProfile,
    ) -> Result<WalkerProfile> {
        let request = self
            .post(&format!("/api/walkers/profile/{}", walker_id))
            .await
            .json(profile);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let wrapped: WalkersEnvelope =
            serde_json::from_str(r#"{"walkers": [{"id": "w-1", "name": "Carlos"}]}"#).unwrap();
        assert_eq!(wrapped.into_inner().len(), 1);

        let bare: WalkersEnvelope =
            serde_json::from_str(r#"[{"id": 3, "hourly_rate": 20.5}]"#).unwrap();
        let walkers = bare.into_inner();
        assert_eq!(walkers[0].id.as_str(), "3");
        assert_eq!(walkers[0].hourly_rate, Some(20.5));
    }
}
