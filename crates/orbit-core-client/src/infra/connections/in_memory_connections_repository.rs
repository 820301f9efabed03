// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::connections::models::ConnectionState;
use crate::domain::connections::repos::ConnectionsRepository as ConnectionsRepositoryTrait;
use crate::domain::shared::models::UserId;

/// Only non-`None` states are stored; absent entries read as `None`, which
/// keeps the map a total function over peer ids.
pub struct InMemoryConnectionsRepository {
    states: Mutex<HashMap<UserId, ConnectionState>>,
}

impl InMemoryConnectionsRepository {
    pub fn new() -> Self {
        Self {
            states: Default::default(),
        }
    }
}

impl Default for InMemoryConnectionsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionsRepositoryTrait for InMemoryConnectionsRepository {
    async fn get(&self, peer_id: &UserId) -> Result<ConnectionState> {
        Ok(self
            .states
            .lock()
            .get(peer_id)
            .copied()
            .unwrap_or_default())
    }

    async fn get_all(&self) -> Result<Vec<(UserId, ConnectionState)>> {
        Ok(self
            .states
            .lock()
            .iter()
            .map(|(peer_id, state)| (peer_id.clone(), *state))
            .collect())
    }

    async fn set(&self, peer_id: &UserId, state: ConnectionState) -> Result<bool> {
        let mut states = self.states.lock();
        let previous = match state {
            ConnectionState::None => states.remove(peer_id).unwrap_or_default(),
            _ => states.insert(peer_id.clone(), state).unwrap_or_default(),
        };
        Ok(previous != state)
    }

    async fn clear(&self) -> Result<()> {
        self.states.lock().clear();
        Ok(())
    }
}
