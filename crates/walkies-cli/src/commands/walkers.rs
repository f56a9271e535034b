//! Walker commands: nearby search and profile management.

use super::AppContext;
use anyhow::Result;
use walkies_core::gateway::WalkerGateway;
use walkies_core::ids::WalkerId;

pub async fn near(ctx: &AppContext, lat: f64, lng: f64) -> Result<()> {
    let walkers = ctx.api.nearby_walkers(lat, lng).await?;
    if walkers.is_empty() {
        println!("No walkers available nearby.");
        return Ok(());
    }
    for walker in walkers {
        let name = walker.full_name.as_deref().unwrap_or("(unnamed)");
        let rate = walker
            .hourly_rate
            .map(|r| format!(" {}/h", r))
            .unwrap_or_default();
        println!("{}  {}{}", walker.id, name, rate);
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, walker_id: &str) -> Result<()> {
    let profile = ctx.api.walker_profile(&WalkerId::from(walker_id)).await?;
    println!("bio:         {}", profile.bio);
    println!("hourly rate: {}", profile.hourly_rate);
    println!("available:   {}", profile.available);
    println!("location:    {}, {}", profile.latitude, profile.longitude);
    Ok(())
}

/// Updates only the fields given on the command line; the rest keep their
/// current server-side values.
pub async fn update(
    ctx: &AppContext,
    walker_id: &str,
    bio: Option<String>,
    hourly_rate: Option<f64>,
    available: Option<bool>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<()> {
    let walker_id = WalkerId::from(walker_id);
    let mut profile = ctx.api.walker_profile(&walker_id).await?;

    if let Some(bio) = bio {
        profile.bio = bio;
    }
    if let Some(hourly_rate) = hourly_rate {
        profile.hourly_rate = hourly_rate;
    }
    if let Some(available) = available {
        profile.available = available;
    }
    if let Some(lat) = lat {
        profile.latitude = lat;
    }
    if let Some(lng) = lng {
        profile.longitude = lng;
    }

    ctx.api.update_walker_profile(&walker_id, &profile).await?;
    println!("Profile updated.");
    Ok(())
}
