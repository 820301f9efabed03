// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynConnectionsDomainService};
use crate::app::event_handlers::{
    ConnectionsEvent, ConnectionsEventType, ServerEvent, ServerEventHandler,
};

/// Handles connection-request events from the realtime channel.
pub struct ConnectionsEventHandler {
    connections_domain_service: DynConnectionsDomainService,
}

impl From<&AppDependencies> for ConnectionsEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            connections_domain_service: deps.connections_domain_service.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for ConnectionsEventHandler {
    fn name(&self) -> &'static str {
        "connections"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connections(event) => {
                self.handle_connections_event(event).await?;
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionsEventHandler {
    async fn handle_connections_event(&self, event: ConnectionsEvent) -> Result<()> {
        match event.r#type {
            ConnectionsEventType::RequestReceived => {
                self.connections_domain_service
                    .handle_incoming_request(&event.peer_id)
                    .await?;
            }
            ConnectionsEventType::RequestEchoed => {
                self.connections_domain_service
                    .handle_request_echo(&event.peer_id)
                    .await?;
            }
            ConnectionsEventType::RequestAccepted => {
                self.connections_domain_service
                    .handle_remote_accept(&event.peer_id)
                    .await?;
            }
        }

        Ok(())
    }
}
