//! Walker domain model: nearby-search results and the walker profile.

use crate::ids::WalkerId;
use serde::{Deserialize, Serialize};

/// A walker as returned by the nearby search.
///
/// Payloads vary between deployments, so everything beyond the id is
/// tolerated as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkerSummary {
    pub id: WalkerId,
    #[serde(default, alias = "name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A walker's own service profile (`/api/walkers/profile/:id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkerProfile {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}
