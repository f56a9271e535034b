//! Chat endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use serde::Deserialize;
use walkies_core::chat::{ChatMessage, NewChatMessage};
use walkies_core::error::Result;
use walkies_core::gateway::ChatGateway;
use walkies_core::ids::BookingId;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessagesEnvelope {
    Wrapped { messages: Vec<ChatMessage> },
    Bare(Vec<ChatMessage>),
}

impl MessagesEnvelope {
    fn into_inner(self) -> Vec<ChatMessage> {
        match self {
            MessagesEnvelope::Wrapped { messages } => messages,
            MessagesEnvelope::Bare(messages) => messages,
        }
    }
}

#[async_trait]
impl ChatGateway for ApiClient {
    async fn fetch_messages(&self, booking_id: &BookingId) -> Result<Vec<ChatMessage>> {
        let request = self.get(&format!("/api/chat/{}", booking_id)).await;
        let envelope: MessagesEnvelope = self.execute(request).await?;
        Ok(envelope.into_inner())
    }

    async fn send_message(&self, message: &NewChatMessage) -> Result<ChatMessage> {
        let request = self.post("/api/chat").await.json(message);
        self.execute(request).await
    }
}
