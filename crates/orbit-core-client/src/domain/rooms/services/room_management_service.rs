// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::rooms::models::{MemberRole, Room};
use crate::domain::shared::models::{RoomId, UserId};

/// Backend boundary for room records: generic inserts, deletes and
/// membership updates against the hosted service. No retry policy is
/// applied; callers treat failures as best-effort.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomManagementService: Send + Sync {
    async fn create_room(&self, room: &Room) -> Result<()>;
    async fn delete_room(&self, id: &RoomId) -> Result<()>;

    async fn add_member(&self, id: &RoomId, user_id: &UserId, role: MemberRole) -> Result<()>;
    async fn remove_member(&self, id: &RoomId, user_id: &UserId) -> Result<()>;

    /// Records a row in the room-creation counter table.
    async fn record_creation(&self, user_id: &UserId) -> Result<()>;

    async fn set_pinned_conclusion(
        &self,
        id: &RoomId,
        text: &str,
        pinned_by: &UserId,
    ) -> Result<()>;

    async fn load_public_rooms(&self) -> Result<Vec<Room>>;
}
