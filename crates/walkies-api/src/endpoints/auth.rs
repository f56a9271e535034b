//! Authentication endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use walkies_core::error::Result;
use walkies_core::gateway::{AuthGateway, LoginOutcome};
use walkies_core::user::{NewUser, UserProfile};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    user: Option<UserProfile>,
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let request = self
            .post("/api/auth/login")
            .await
            .json(&LoginRequest { email, password });
        let response: LoginResponse = self.execute(request).await?;
        Ok(LoginOutcome {
            token: response.token,
            user: response.user,
        })
    }

    async fn register(&self, new_user: &NewUser) -> Result<UserProfile> {
        new_user.validate()?;
        let request = self.post("/api/users").await.json(new_user);
        self.execute(request).await
    }
}
