//! Session commands: login, logout, whoami and registration.

use super::AppContext;
use anyhow::Result;
use walkies_core::gateway::AuthGateway;
use walkies_core::user::NewUser;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let outcome = ctx.api.login(email, password).await?;
    let greeting = outcome
        .user
        .as_ref()
        .map(|user| user.full_name.clone())
        .unwrap_or_else(|| email.to_string());
    ctx.store.login(outcome.token, outcome.user).await;
    println!("Signed in as {}.", greeting);
    Ok(())
}

pub async fn logout(ctx: &AppContext) {
    ctx.store.logout().await;
}

pub async fn whoami(ctx: &AppContext) {
    match ctx.store.user().await {
        Some(user) => println!("{} <{}> ({})", user.full_name, user.email, user.role),
        None if ctx.store.is_authenticated().await => {
            println!("Signed in (token only, no profile).")
        }
        None => println!("Not signed in."),
    }
}

pub async fn register(
    ctx: &AppContext,
    role: &str,
    name: String,
    email: String,
    password: String,
    dni: String,
    phone: String,
) -> Result<()> {
    let new_user = NewUser {
        dni: Some(dni),
        full_name: name,
        email,
        password,
        phone: Some(phone),
        role: role.parse()?,
    };
    let profile = ctx.api.register(&new_user).await?;
    println!(
        "Account created for {} ({}). Run `walkies login` to sign in.",
        profile.full_name, profile.role
    );
    Ok(())
}
