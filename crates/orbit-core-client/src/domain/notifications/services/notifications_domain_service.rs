// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::notifications::models::{
    Notification, NotificationId, NotificationKind, PeerRef,
};
use crate::domain::shared::models::UserId;

/// The single entry point collaborators use to push entries into the
/// notification feed. The feed owns ordering and read state; callers never
/// construct `Notification` values themselves.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationsDomainService: Send + Sync {
    /// Creates a notification (unread, stamped with a fresh monotonic id)
    /// and prepends it to the feed.
    async fn emit(
        &self,
        kind: NotificationKind,
        text: String,
        peer: Option<PeerRef>,
    ) -> Result<Notification>;

    async fn load_notifications(&self) -> Result<Vec<Notification>>;
    async fn unread_count(&self) -> Result<usize>;

    async fn mark_read(&self, id: NotificationId) -> Result<()>;
    async fn mark_read_for_peer(&self, peer_id: &UserId) -> Result<()>;
    async fn mark_all_read(&self) -> Result<()>;

    async fn clear_cache(&self) -> Result<()>;
}
