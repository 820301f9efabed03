// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::rooms::models::Room;
use crate::domain::shared::models::RoomId;

/// Local cache of the rooms the signed-in user owns or joined, newest
/// first, plus the room-creation ledger backing the daily quota.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomsRepository: Send + Sync {
    async fn get(&self, id: &RoomId) -> Result<Option<Room>>;
    async fn get_all(&self) -> Result<Vec<Room>>;

    async fn insert(&self, room: Room) -> Result<()>;
    async fn update(&self, room: Room) -> Result<bool>;
    async fn delete(&self, id: &RoomId) -> Result<bool>;

    async fn mark_joined(&self, id: &RoomId) -> Result<bool>;
    async fn unmark_joined(&self, id: &RoomId) -> Result<bool>;
    async fn joined_ids(&self) -> Result<Vec<RoomId>>;

    async fn record_creation(&self, at: DateTime<Utc>) -> Result<()>;
    async fn creation_count_since(&self, since: DateTime<Utc>) -> Result<usize>;

    async fn clear(&self) -> Result<()>;
}
