// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::rooms::models::{MemberRole, Room, RoomVisibility};
use crate::domain::rooms::services::RoomManagementService as RoomManagementServiceTrait;
use crate::domain::shared::models::{RoomId, UserId};

/// In-process stand-in for the hosted record store, seeded with the public
/// rooms the discover listing starts from.
pub struct LocalRoomManagementService {
    rooms: Mutex<Vec<Room>>,
    members: Mutex<HashMap<RoomId, HashMap<UserId, MemberRole>>>,
    creations: Mutex<Vec<UserId>>,
}

impl LocalRoomManagementService {
    pub fn new(seed_rooms: Vec<Room>) -> Self {
        Self {
            rooms: Mutex::new(seed_rooms),
            members: Default::default(),
            creations: Default::default(),
        }
    }
}

#[async_trait]
impl RoomManagementServiceTrait for LocalRoomManagementService {
    async fn create_room(&self, room: &Room) -> Result<()> {
        let mut rooms = self.rooms.lock();
        rooms.retain(|r| r.id != room.id);
        rooms.push(room.clone());
        Ok(())
    }

    async fn delete_room(&self, id: &RoomId) -> Result<()> {
        self.rooms.lock().retain(|room| &room.id != id);
        self.members.lock().remove(id);
        Ok(())
    }

    async fn add_member(&self, id: &RoomId, user_id: &UserId, role: MemberRole) -> Result<()> {
        self.members
            .lock()
            .entry(id.clone())
            .or_default()
            .insert(user_id.clone(), role);

        if let Some(room) = self.rooms.lock().iter_mut().find(|room| &room.id == id) {
            room.member_count += 1;
        }
        Ok(())
    }

    async fn remove_member(&self, id: &RoomId, user_id: &UserId) -> Result<()> {
        if let Some(members) = self.members.lock().get_mut(id) {
            members.remove(user_id);
        }
        if let Some(room) = self.rooms.lock().iter_mut().find(|room| &room.id == id) {
            room.member_count = room.member_count.saturating_sub(1);
        }
        Ok(())
    }

    async fn record_creation(&self, user_id: &UserId) -> Result<()> {
        self.creations.lock().push(user_id.clone());
        Ok(())
    }

    async fn set_pinned_conclusion(
        &self,
        id: &RoomId,
        text: &str,
        _pinned_by: &UserId,
    ) -> Result<()> {
        if let Some(room) = self.rooms.lock().iter_mut().find(|room| &room.id == id) {
            room.pinned_conclusion = Some(text.to_string());
        }
        Ok(())
    }

    async fn load_public_rooms(&self) -> Result<Vec<Room>> {
        Ok(self
            .rooms
            .lock()
            .iter()
            .filter(|room| room.visibility == RoomVisibility::Public)
            .cloned()
            .collect())
    }
}
