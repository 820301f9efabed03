// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::DynServerEventHandlerQueue;
use crate::app::event_handlers::{MessagesEvent, ServerEvent};
use crate::domain::messaging::models::Message;
use crate::domain::messaging::services::MessagingService as MessagingServiceTrait;

/// Feeds each insert straight back through the server event queue, the
/// same path a realtime subscription delivers remote inserts on. The local
/// cache therefore updates identically for our own and others' messages.
pub struct LoopbackMessagingService {
    server_event_queue: DynServerEventHandlerQueue,
}

impl LoopbackMessagingService {
    pub fn new(server_event_queue: DynServerEventHandlerQueue) -> Self {
        Self { server_event_queue }
    }
}

#[async_trait]
impl MessagingServiceTrait for LoopbackMessagingService {
    async fn send_message(&self, message: &Message) -> Result<()> {
        self.server_event_queue
            .handle_event(ServerEvent::Messages(MessagesEvent::Received {
                message: message.clone(),
            }))
            .await;
        Ok(())
    }
}
