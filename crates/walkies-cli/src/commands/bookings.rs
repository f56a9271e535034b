//! Booking commands, built on the shared booking desk.

use super::{AlwaysConfirm, AppContext, TerminalConfirm};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use walkies_application::{BookingDesk, ConfirmCompletion};
use walkies_core::booking::{Booking, BookingDraft};
use walkies_core::gateway::PetGateway;
use walkies_core::ids::{BookingId, PetId, WalkerId};

async fn desk(ctx: &AppContext) -> Result<BookingDesk> {
    let role = ctx.current_role().await?;
    Ok(BookingDesk::new(role, Arc::new(ctx.api.clone())))
}

fn print_booking(booking: &Booking) {
    let counterpart = booking
        .walker_name
        .as_deref()
        .or(booking.owner_name.as_deref())
        .unwrap_or("-");
    let pet = booking.pet_name.as_deref().unwrap_or("-");
    println!(
        "{}  {}  {}h  {} / {}  [{}]",
        booking.id,
        booking.start_time.format("%Y-%m-%d %H:%M"),
        booking.duration_hours,
        counterpart,
        pet,
        booking.status
    );
}

fn print_section(title: &str, bookings: &[Booking]) {
    println!("{}:", title);
    if bookings.is_empty() {
        println!("  (none)");
        return;
    }
    for booking in bookings {
        print!("  ");
        print_booking(booking);
    }
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let desk = desk(ctx).await?;
    desk.refresh().await?;
    let board = desk.board().await;

    print_section("Pending requests", &board.pending);
    print_section("Active walks", &board.active);
    print_section("History", &board.history);
    Ok(())
}

pub async fn create(
    ctx: &AppContext,
    walker_id: String,
    pet_id: Option<String>,
    start: &str,
    hours: f64,
) -> Result<()> {
    let desk = desk(ctx).await?;
    let start_time: DateTime<Utc> = start.parse()?;
    let draft = BookingDraft {
        walker_id: Some(WalkerId::from(walker_id)),
        pet_id: pet_id.map(PetId::from),
        start_time: Some(start_time),
        duration_hours: Some(hours),
    };
    // The draft falls back to the first pet when none was given.
    let pets = ctx.api.list_pets().await?;
    let created = desk.create(draft, &pets).await?;
    println!("Booking {} requested.", created.id);
    Ok(())
}

pub async fn accept(ctx: &AppContext, booking_id: &str) -> Result<()> {
    let desk = desk(ctx).await?;
    desk.accept(&BookingId::from(booking_id)).await?;
    println!("Booking {} accepted.", booking_id);
    Ok(())
}

pub async fn reject(ctx: &AppContext, booking_id: &str) -> Result<()> {
    let desk = desk(ctx).await?;
    desk.reject(&BookingId::from(booking_id)).await?;
    println!("Booking {} rejected.", booking_id);
    Ok(())
}

pub async fn complete(ctx: &AppContext, booking_id: &str, yes: bool) -> Result<()> {
    let desk = desk(ctx).await?;
    let confirm: Box<dyn ConfirmCompletion> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(TerminalConfirm)
    };
    let done = desk
        .complete(&BookingId::from(booking_id), confirm.as_ref())
        .await?;
    if done {
        println!("Booking {} completed.", booking_id);
    } else {
        println!("Left unchanged.");
    }
    Ok(())
}
