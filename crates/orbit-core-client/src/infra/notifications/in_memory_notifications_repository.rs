// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::notifications::models::{Notification, NotificationId};
use crate::domain::notifications::repos::NotificationsRepository as NotificationsRepositoryTrait;
use crate::domain::shared::models::UserId;

pub struct InMemoryNotificationsRepository {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationsRepository {
    pub fn new() -> Self {
        Self {
            notifications: Default::default(),
        }
    }
}

impl Default for InMemoryNotificationsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationsRepositoryTrait for InMemoryNotificationsRepository {
    async fn prepend(&self, notification: Notification) -> Result<()> {
        self.notifications.lock().insert(0, notification);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.lock().clone())
    }

    async fn unread_count(&self) -> Result<usize> {
        Ok(self
            .notifications
            .lock()
            .iter()
            .filter(|n| !n.is_read)
            .count())
    }

    async fn mark_read(&self, id: NotificationId) -> Result<bool> {
        let mut notifications = self.notifications.lock();
        let mut changed = false;
        for notification in notifications.iter_mut() {
            if notification.id == id && !notification.is_read {
                notification.is_read = true;
                changed = true;
            }
        }
        Ok(changed)
    }

    async fn mark_read_for_peer(&self, peer_id: &UserId) -> Result<bool> {
        let mut notifications = self.notifications.lock();
        let mut changed = false;
        for notification in notifications.iter_mut() {
            if notification.references_peer(peer_id) && !notification.is_read {
                notification.is_read = true;
                changed = true;
            }
        }
        Ok(changed)
    }

    async fn mark_all_read(&self) -> Result<bool> {
        let mut notifications = self.notifications.lock();
        let mut changed = false;
        for notification in notifications.iter_mut() {
            if !notification.is_read {
                notification.is_read = true;
                changed = true;
            }
        }
        Ok(changed)
    }

    async fn clear(&self) -> Result<()> {
        self.notifications.lock().clear();
        Ok(())
    }
}
