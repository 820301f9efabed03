// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynMessagingDomainService};
use crate::app::event_handlers::{MessagesEvent, ServerEvent, ServerEventHandler};

/// Handles message inserts pushed by the realtime subscription.
pub struct MessagesEventHandler {
    messaging_domain_service: DynMessagingDomainService,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            messaging_domain_service: deps.messaging_domain_service.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Messages(MessagesEvent::Received { message }) => {
                self.messaging_domain_service
                    .handle_received_message(message)
                    .await?;
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
