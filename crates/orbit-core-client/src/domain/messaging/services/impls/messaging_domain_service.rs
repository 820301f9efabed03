// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynMessagesRepository, DynMessagingService,
    DynShortIdProvider, DynTimeProvider, DynUploadService,
};
use crate::domain::messaging::models::{
    Emoji, Message, MessageError, MessageId, SendMessageRequest,
};
use crate::domain::shared::models::RoomId;
use crate::util::profanity::contains_profanity;
use crate::{ClientEvent, ClientRoomEventType};

use super::super::MessagingDomainService as MessagingDomainServiceTrait;

pub struct MessagingDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    messages_repo: DynMessagesRepository,
    messaging_service: DynMessagingService,
    short_id_provider: DynShortIdProvider,
    time_provider: DynTimeProvider,
    upload_service: DynUploadService,
}

impl MessagingDomainService {
    pub fn new(
        client_event_dispatcher: DynClientEventDispatcher,
        ctx: DynAppContext,
        messages_repo: DynMessagesRepository,
        messaging_service: DynMessagingService,
        short_id_provider: DynShortIdProvider,
        time_provider: DynTimeProvider,
        upload_service: DynUploadService,
    ) -> Self {
        Self {
            client_event_dispatcher,
            ctx,
            messages_repo,
            messaging_service,
            short_id_provider,
            time_provider,
            upload_service,
        }
    }
}

#[async_trait]
impl MessagingDomainServiceTrait for MessagingDomainService {
    async fn send_message(&self, room_id: &RoomId, request: SendMessageRequest) -> Result<()> {
        let body = request.body.trim().to_string();

        if body.is_empty() && request.attachment.is_none() {
            return Err(MessageError::Empty.into());
        }
        if contains_profanity(&body) {
            return Err(MessageError::Profanity.into());
        }

        let attachment_url = match request.attachment {
            Some(attachment) => {
                let max_bytes = self.ctx.config.max_attachment_size;
                if attachment.data.len() > max_bytes {
                    return Err(MessageError::AttachmentTooLarge { max_bytes }.into());
                }
                Some(
                    self.upload_service
                        .upload(&attachment.filename, &attachment.media_type, &attachment.data)
                        .await?,
                )
            }
            None => None,
        };

        let message = Message {
            id: self.short_id_provider.new_id().parse::<MessageId>()?,
            room_id: room_id.clone(),
            author: self.ctx.signed_in_user_id()?,
            body,
            attachment_url,
            reply_to: request.reply_to,
            reactions: vec![],
            timestamp: self.time_provider.now(),
        };

        // Best-effort insert; the realtime echo appends it locally.
        if let Err(error) = self.messaging_service.send_message(&message).await {
            warn!("Failed to send message to {room_id}: {error}");
            return Err(error);
        }

        Ok(())
    }

    async fn load_messages(&self, room_id: &RoomId) -> Result<Vec<Message>> {
        self.messages_repo.get_all(room_id).await
    }

    async fn toggle_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: Emoji,
    ) -> Result<()> {
        if self
            .messages_repo
            .toggle_reaction(room_id, message_id, emoji)
            .await?
        {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::RoomChanged {
                    id: room_id.clone(),
                    r#type: ClientRoomEventType::MessagesUpdated {
                        message_ids: vec![message_id.clone()],
                    },
                });
        }
        Ok(())
    }

    async fn handle_received_message(&self, message: Message) -> Result<()> {
        let room_id = message.room_id.clone();
        let message_id = message.id.clone();

        self.messages_repo.append(message).await?;
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomChanged {
                id: room_id,
                r#type: ClientRoomEventType::MessagesAppended {
                    message_ids: vec![message_id],
                },
            });

        Ok(())
    }

    async fn clear_cache(&self) -> Result<()> {
        self.messages_repo.clear().await
    }
}
