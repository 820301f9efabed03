// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::domain::rooms::models::Room;
use crate::domain::rooms::repos::RoomsRepository as RoomsRepositoryTrait;
use crate::domain::shared::models::RoomId;

#[derive(Default)]
struct State {
    rooms: Vec<Room>,
    joined: HashSet<RoomId>,
    creations: Vec<DateTime<Utc>>,
}

pub struct InMemoryRoomsRepository {
    state: Mutex<State>,
}

impl InMemoryRoomsRepository {
    pub fn new() -> Self {
        Self {
            state: Default::default(),
        }
    }
}

impl Default for InMemoryRoomsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomsRepositoryTrait for InMemoryRoomsRepository {
    async fn get(&self, id: &RoomId) -> Result<Option<Room>> {
        Ok(self
            .state
            .lock()
            .rooms
            .iter()
            .find(|room| &room.id == id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Room>> {
        Ok(self.state.lock().rooms.clone())
    }

    async fn insert(&self, room: Room) -> Result<()> {
        let mut state = self.state.lock();
        state.rooms.retain(|r| r.id != room.id);
        state.rooms.insert(0, room);
        Ok(())
    }

    async fn update(&self, room: Room) -> Result<bool> {
        let mut state = self.state.lock();
        let Some(existing) = state.rooms.iter_mut().find(|r| r.id == room.id) else {
            return Ok(false);
        };
        *existing = room;
        Ok(true)
    }

    async fn delete(&self, id: &RoomId) -> Result<bool> {
        let mut state = self.state.lock();
        let len = state.rooms.len();
        state.rooms.retain(|room| &room.id != id);
        Ok(state.rooms.len() < len)
    }

    async fn mark_joined(&self, id: &RoomId) -> Result<bool> {
        Ok(self.state.lock().joined.insert(id.clone()))
    }

    async fn unmark_joined(&self, id: &RoomId) -> Result<bool> {
        Ok(self.state.lock().joined.remove(id))
    }

    async fn joined_ids(&self) -> Result<Vec<RoomId>> {
        Ok(self.state.lock().joined.iter().cloned().collect())
    }

    async fn record_creation(&self, at: DateTime<Utc>) -> Result<()> {
        self.state.lock().creations.push(at);
        Ok(())
    }

    async fn creation_count_since(&self, since: DateTime<Utc>) -> Result<usize> {
        Ok(self
            .state
            .lock()
            .creations
            .iter()
            .filter(|at| **at >= since)
            .count())
    }

    async fn clear(&self) -> Result<()> {
        *self.state.lock() = State::default();
        Ok(())
    }
}
