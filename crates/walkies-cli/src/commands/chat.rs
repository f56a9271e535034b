//! Interactive chat for one booking.
//!
//! Subscribes to the polling feed and prints the transcript whenever it
//! changes; lines typed on stdin are sent as messages. EOF (Ctrl-D) closes
//! the window and stops the poll.

use super::AppContext;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use walkies_application::{ChatFeed, MessagesCallback};
use walkies_core::chat::ChatMessage;
use walkies_core::ids::BookingId;

fn print_transcript(messages: &[ChatMessage]) {
    println!("--- {} message(s) ---", messages.len());
    for message in messages {
        println!(
            "[{}] {}: {}",
            message.created_at.format("%H:%M"),
            message.sender_id,
            message.content
        );
    }
}

pub async fn open(ctx: &AppContext, booking_id: String) -> Result<()> {
    let feed = ChatFeed::new(Arc::new(ctx.api.clone()));
    let on_messages: MessagesCallback = Arc::new(|messages| print_transcript(&messages));
    let window = feed.subscribe(BookingId::from(booking_id), on_messages);

    println!("Type a message and press enter to send; Ctrl-D to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        window.set_draft(line).await;
        if let Err(e) = window.send_draft().await {
            eprintln!("Could not send: {}", e);
        }
    }

    window.close();
    Ok(())
}
