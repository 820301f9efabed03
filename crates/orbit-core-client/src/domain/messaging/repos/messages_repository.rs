// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{Emoji, Message, MessageId};
use crate::domain::shared::models::RoomId;

/// Local cache of room messages in arrival order (oldest first).
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    async fn append(&self, message: Message) -> Result<()>;
    async fn get_all(&self, room_id: &RoomId) -> Result<Vec<Message>>;

    /// Adds the emoji to the message's reaction set, or removes it when
    /// already present. Returns whether the message was found.
    async fn toggle_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: Emoji,
    ) -> Result<bool>;

    async fn clear_room(&self, room_id: &RoomId) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
