// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::rooms::models::{DiscoverFilter, Room, RoomDraft};
use crate::domain::shared::models::RoomId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomsDomainService: Send + Sync {
    async fn load_rooms(&self) -> Result<Vec<Room>>;

    /// Validates the draft, enforces the daily creation quota for
    /// non-verified accounts, persists the room, joins the creator as owner
    /// and emits the matching feed notification.
    async fn create_room(&self, draft: RoomDraft) -> Result<Room>;

    async fn delete_room(&self, id: &RoomId) -> Result<()>;
    async fn join_room(&self, id: &RoomId) -> Result<Room>;
    async fn leave_room(&self, id: &RoomId) -> Result<()>;

    async fn pin_conclusion(&self, id: &RoomId, text: &str) -> Result<()>;

    /// Public rooms matching the topic filter and, when an origin is given,
    /// within each room's discovery radius.
    async fn discover(&self, filter: DiscoverFilter) -> Result<Vec<Room>>;

    async fn clear_cache(&self) -> Result<()>;
}
