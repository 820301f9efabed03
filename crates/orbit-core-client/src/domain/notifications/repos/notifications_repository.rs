// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::notifications::models::{Notification, NotificationId};
use crate::domain::shared::models::UserId;

/// Storage for the ordered notification feed, newest first. Entries are
/// never deleted except by the full reset on sign-out.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationsRepository: Send + Sync {
    async fn prepend(&self, notification: Notification) -> Result<()>;
    async fn get_all(&self) -> Result<Vec<Notification>>;
    async fn unread_count(&self) -> Result<usize>;

    /// Each `mark_*` method returns whether any entry actually changed.
    async fn mark_read(&self, id: NotificationId) -> Result<bool>;
    async fn mark_read_for_peer(&self, peer_id: &UserId) -> Result<bool>;
    async fn mark_all_read(&self) -> Result<bool>;

    async fn clear(&self) -> Result<()>;
}
