// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::app::deps::{AppDependencies, DynConnectionsDomainService};
use crate::dtos::{ConnectionState, UserId};

pub struct ConnectionsService {
    connections_domain_service: DynConnectionsDomainService,
}

impl From<&AppDependencies> for ConnectionsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            connections_domain_service: deps.connections_domain_service.clone(),
        }
    }
}

impl ConnectionsService {
    pub async fn send_request(&self, peer_id: &UserId) -> Result<()> {
        self.connections_domain_service.send_request(peer_id).await
    }

    pub async fn accept_connection(&self, peer_id: &UserId) -> Result<()> {
        self.connections_domain_service
            .accept_connection(peer_id)
            .await
    }

    pub async fn decline_connection(&self, peer_id: &UserId) -> Result<()> {
        self.connections_domain_service
            .decline_connection(peer_id)
            .await
    }

    pub async fn disconnect(&self, peer_id: &UserId) -> Result<()> {
        self.connections_domain_service.disconnect(peer_id).await
    }

    pub async fn status_of(&self, peer_id: &UserId) -> Result<ConnectionState> {
        self.connections_domain_service.status_of(peer_id).await
    }

    pub async fn accepted_peers(&self) -> Result<Vec<UserId>> {
        self.connections_domain_service.accepted_peers().await
    }
}
