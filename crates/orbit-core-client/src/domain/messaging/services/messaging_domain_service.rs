// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{Emoji, Message, MessageId, SendMessageRequest};
use crate::domain::shared::models::RoomId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingDomainService: Send + Sync {
    /// Validates the request (body or attachment required, profanity
    /// screen, attachment size), uploads the attachment if any and inserts
    /// the message. The local cache is updated by the realtime echo.
    async fn send_message(&self, room_id: &RoomId, request: SendMessageRequest) -> Result<()>;

    async fn load_messages(&self, room_id: &RoomId) -> Result<Vec<Message>>;

    async fn toggle_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: Emoji,
    ) -> Result<()>;

    /// Entry point for messages arriving over the realtime channel,
    /// including the echo of our own inserts.
    async fn handle_received_message(&self, message: Message) -> Result<()>;

    async fn clear_cache(&self) -> Result<()>;
}
