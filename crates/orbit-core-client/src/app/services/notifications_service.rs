// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::app::deps::{AppDependencies, DynNotificationsDomainService};
use crate::dtos::{Notification, NotificationId, NotificationKind};

pub struct NotificationsService {
    notifications_domain_service: DynNotificationsDomainService,
}

impl From<&AppDependencies> for NotificationsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            notifications_domain_service: deps.notifications_domain_service.clone(),
        }
    }
}

impl NotificationsService {
    pub async fn load_notifications(&self) -> Result<Vec<Notification>> {
        self.notifications_domain_service.load_notifications().await
    }

    pub async fn unread_count(&self) -> Result<usize> {
        self.notifications_domain_service.unread_count().await
    }

    pub async fn mark_read(&self, id: NotificationId) -> Result<()> {
        self.notifications_domain_service.mark_read(id).await
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        self.notifications_domain_service.mark_all_read().await
    }

    /// Posts a free-form system message into the feed.
    pub async fn post_system_message(&self, text: impl Into<String>) -> Result<Notification> {
        self.notifications_domain_service
            .emit(NotificationKind::System, text.into(), None)
            .await
    }
}
