// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::messaging::models::{Emoji, Message, MessageId};
use crate::domain::messaging::repos::MessagesRepository as MessagesRepositoryTrait;
use crate::domain::shared::models::RoomId;

pub struct InMemoryMessagesRepository {
    messages: Mutex<HashMap<RoomId, Vec<Message>>>,
}

impl InMemoryMessagesRepository {
    pub fn new() -> Self {
        Self {
            messages: Default::default(),
        }
    }
}

impl Default for InMemoryMessagesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagesRepositoryTrait for InMemoryMessagesRepository {
    async fn append(&self, message: Message) -> Result<()> {
        self.messages
            .lock()
            .entry(message.room_id.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn get_all(&self, room_id: &RoomId) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .get(room_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn toggle_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: Emoji,
    ) -> Result<bool> {
        let mut messages = self.messages.lock();
        let Some(message) = messages
            .get_mut(room_id)
            .and_then(|room| room.iter_mut().find(|m| &m.id == message_id))
        else {
            return Ok(false);
        };

        if let Some(idx) = message.reactions.iter().position(|r| r == &emoji) {
            message.reactions.remove(idx);
        } else {
            message.reactions.push(emoji);
        }
        Ok(true)
    }

    async fn clear_room(&self, room_id: &RoomId) -> Result<()> {
        self.messages.lock().remove(room_id);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.messages.lock().clear();
        Ok(())
    }
}
