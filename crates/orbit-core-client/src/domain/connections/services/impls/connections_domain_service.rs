// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectionsRepository,
    DynNotificationsDomainService, DynPeerDirectoryRepository, DynRequestEchoService,
};
use crate::domain::connections::models::{ConnectionError, ConnectionState};
use crate::domain::notifications::models::{NotificationKind, PeerRef};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

use super::super::ConnectionsDomainService as ConnectionsDomainServiceTrait;

pub struct ConnectionsDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    connections_repo: DynConnectionsRepository,
    ctx: DynAppContext,
    notifications_domain_service: DynNotificationsDomainService,
    peer_directory_repo: DynPeerDirectoryRepository,
    request_echo_service: DynRequestEchoService,
}

impl ConnectionsDomainService {
    pub fn new(
        client_event_dispatcher: DynClientEventDispatcher,
        connections_repo: DynConnectionsRepository,
        ctx: DynAppContext,
        notifications_domain_service: DynNotificationsDomainService,
        peer_directory_repo: DynPeerDirectoryRepository,
        request_echo_service: DynRequestEchoService,
    ) -> Self {
        Self {
            client_event_dispatcher,
            connections_repo,
            ctx,
            notifications_domain_service,
            peer_directory_repo,
            request_echo_service,
        }
    }

    /// Resolves the display name for `peer_id`, falling back to the raw id
    /// for peers missing from the directory.
    async fn peer_ref(&self, peer_id: &UserId) -> PeerRef {
        let name = self
            .peer_directory_repo
            .get(peer_id)
            .await
            .unwrap_or_default()
            .map(|peer| peer.name)
            .unwrap_or_else(|| peer_id.to_string());

        PeerRef {
            id: peer_id.clone(),
            name,
        }
    }
}

#[async_trait]
impl ConnectionsDomainServiceTrait for ConnectionsDomainService {
    async fn send_request(&self, peer_id: &UserId) -> Result<()> {
        let state = self.connections_repo.get(peer_id).await?;
        if state != ConnectionState::None {
            return Err(ConnectionError::InvalidTransition {
                attempted: "send a request",
                state,
            }
            .into());
        }

        self.connections_repo
            .set(peer_id, ConnectionState::PendingSent)
            .await?;

        let peer = self.peer_ref(peer_id).await;
        self.notifications_domain_service
            .emit(
                NotificationKind::RequestSent,
                format!(
                    "Connection request sent to {}. Waiting for them to accept.",
                    peer.name
                ),
                None,
            )
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionsChanged);

        // Stand-in for the realtime push the remote device would receive.
        self.request_echo_service
            .schedule_echo(peer_id.clone(), self.ctx.config.request_echo_delay);

        Ok(())
    }

    async fn accept_connection(&self, peer_id: &UserId) -> Result<()> {
        let state = self.connections_repo.get(peer_id).await?;

        match state {
            // Repeat-accept is a no-op; no duplicate notification.
            ConnectionState::Accepted => return Ok(()),
            ConnectionState::PendingIncoming | ConnectionState::PendingSent => (),
            ConnectionState::None => {
                return Err(ConnectionError::InvalidTransition {
                    attempted: "accept a request",
                    state,
                }
                .into())
            }
        }

        self.connections_repo
            .set(peer_id, ConnectionState::Accepted)
            .await?;
        self.notifications_domain_service
            .mark_read_for_peer(peer_id)
            .await?;

        let peer = self.peer_ref(peer_id).await;
        self.notifications_domain_service
            .emit(
                NotificationKind::Accepted,
                format!(
                    "You're now connected with {}! You can now chat, call, and message each other.",
                    peer.name
                ),
                None,
            )
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionsChanged);

        Ok(())
    }

    async fn decline_connection(&self, peer_id: &UserId) -> Result<()> {
        let state = self.connections_repo.get(peer_id).await?;

        match state {
            ConnectionState::PendingIncoming | ConnectionState::PendingSent => (),
            ConnectionState::None | ConnectionState::Accepted => {
                return Err(ConnectionError::InvalidTransition {
                    attempted: "decline a request",
                    state,
                }
                .into())
            }
        }

        self.connections_repo
            .set(peer_id, ConnectionState::None)
            .await?;
        self.notifications_domain_service
            .mark_read_for_peer(peer_id)
            .await?;

        let peer = self.peer_ref(peer_id).await;
        self.notifications_domain_service
            .emit(
                NotificationKind::Declined,
                format!("Connection request from {} was declined.", peer.name),
                None,
            )
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionsChanged);

        Ok(())
    }

    async fn disconnect(&self, peer_id: &UserId) -> Result<()> {
        let state = self.connections_repo.get(peer_id).await?;
        if state != ConnectionState::Accepted {
            return Err(ConnectionError::InvalidTransition {
                attempted: "disconnect",
                state,
            }
            .into());
        }

        // Unilateral teardown. Deliberately silent: no notification.
        self.connections_repo
            .set(peer_id, ConnectionState::None)
            .await?;
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionsChanged);

        Ok(())
    }

    async fn status_of(&self, peer_id: &UserId) -> Result<ConnectionState> {
        self.connections_repo.get(peer_id).await
    }

    async fn accepted_peers(&self) -> Result<Vec<UserId>> {
        Ok(self
            .connections_repo
            .get_all()
            .await?
            .into_iter()
            .filter(|(_, state)| *state == ConnectionState::Accepted)
            .map(|(peer_id, _)| peer_id)
            .collect())
    }

    async fn handle_incoming_request(&self, peer_id: &UserId) -> Result<()> {
        let state = self.connections_repo.get(peer_id).await?;
        if state != ConnectionState::None {
            warn!("Ignoring incoming connection request from {peer_id} in state '{state}'");
            return Ok(());
        }

        self.connections_repo
            .set(peer_id, ConnectionState::PendingIncoming)
            .await?;

        let peer = self.peer_ref(peer_id).await;
        self.notifications_domain_service
            .emit(
                NotificationKind::IncomingRequest,
                format!("{} sent you a connection request.", peer.name),
                Some(peer),
            )
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionsChanged);

        Ok(())
    }

    async fn handle_request_echo(&self, peer_id: &UserId) -> Result<()> {
        // Single-device rendition of the remote party's incoming request.
        // Our own entry stays `PendingSent`; only the feed sees the echo.
        let peer = self.peer_ref(peer_id).await;
        self.notifications_domain_service
            .emit(
                NotificationKind::IncomingRequest,
                format!("{} received your request. Accept it for them?", peer.name),
                Some(peer),
            )
            .await?;
        Ok(())
    }

    async fn handle_remote_accept(&self, peer_id: &UserId) -> Result<()> {
        let state = self.connections_repo.get(peer_id).await?;
        if state != ConnectionState::PendingSent {
            warn!("Ignoring remote accept from {peer_id} in state '{state}'");
            return Ok(());
        }
        self.accept_connection(peer_id).await
    }

    async fn clear_cache(&self) -> Result<()> {
        self.connections_repo.clear().await
    }
}
