//! User domain model: profiles, roles and the registration payload.

use crate::error::{Result, WalkiesError};
use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two account roles the marketplace knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A pet owner: creates bookings and marks walks completed.
    Owner,
    /// A dog walker: accepts or rejects incoming booking requests.
    Walker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Walker => "walker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = WalkiesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "walker" => Ok(Role::Walker),
            other => Err(WalkiesError::validation(format!(
                "unknown role '{}', expected 'owner' or 'walker'",
                other
            ))),
        }
    }
}

/// The authenticated identity as returned by the API.
///
/// Immutable from the client's perspective; it is only ever replaced wholesale
/// on login. The API is inconsistent about the display-name field, so both
/// `full_name` and `name` are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default)]
    pub email: String,
    #[serde(alias = "name")]
    pub full_name: String,
    pub role: Role,
}

/// Registration payload for `POST /api/users`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
}

impl NewUser {
    /// Client-side checks performed before any request is sent.
    ///
    /// Every field is required; the national id must additionally be at
    /// least 8 characters.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(WalkiesError::validation("full name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(WalkiesError::validation("email is required"));
        }
        if self.password.is_empty() {
            return Err(WalkiesError::validation("password is required"));
        }
        let dni = self.dni.as_deref().map(str::trim).unwrap_or("");
        if dni.is_empty() {
            return Err(WalkiesError::validation("dni is required"));
        }
        if dni.len() < 8 {
            return Err(WalkiesError::validation(
                "dni must be at least 8 characters",
            ));
        }
        if self.phone.as_deref().map(str::trim).unwrap_or("").is_empty() {
            return Err(WalkiesError::validation("phone is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> NewUser {
        NewUser {
            dni: Some("12345678".to_string()),
            full_name: "Maria Lopez".to_string(),
            email: "maria@example.com".to_string(),
            password: "hunter22".to_string(),
            phone: Some("999111222".to_string()),
            role: Role::Owner,
        }
    }

    #[test]
    fn test_role_roundtrip() {
        assert_eq!(serde_json::to_string(&Role::Walker).unwrap(), "\"walker\"");
        let role: Role = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(role, Role::Owner);
        assert_eq!("Walker".parse::<Role>().unwrap(), Role::Walker);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_profile_accepts_name_alias() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": 7, "name": "Jorge", "role": "walker"}"#,
        )
        .unwrap();
        assert_eq!(profile.full_name, "Jorge");
        assert_eq!(profile.id.as_str(), "7");
        assert_eq!(profile.email, "");
    }

    #[test]
    fn test_new_user_validation() {
        assert!(sample_user().validate().is_ok());

        let mut missing_name = sample_user();
        missing_name.full_name = "  ".to_string();
        assert!(missing_name.validate().is_err());

        let mut short_dni = sample_user();
        short_dni.dni = Some("1234".to_string());
        assert!(short_dni.validate().is_err());
    }

    #[test]
    fn test_registration_requires_every_field() {
        let mut no_dni = sample_user();
        no_dni.dni = None;
        assert!(no_dni.validate().is_err());

        let mut blank_dni = sample_user();
        blank_dni.dni = Some("   ".to_string());
        assert!(blank_dni.validate().is_err());

        let mut no_phone = sample_user();
        no_phone.phone = None;
        assert!(no_phone.validate().is_err());

        let mut blank_phone = sample_user();
        blank_phone.phone = Some("".to_string());
        assert!(blank_phone.validate().is_err());
    }
}
