// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{DynClientEventDispatcher, DynNotificationsRepository, DynTimeProvider};
use crate::domain::notifications::models::{
    Notification, NotificationId, NotificationKind, PeerRef,
};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

use super::super::NotificationsDomainService as NotificationsDomainServiceTrait;

pub struct NotificationsDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    notifications_repo: DynNotificationsRepository,
    time_provider: DynTimeProvider,
    last_id: AtomicI64,
}

impl NotificationsDomainService {
    pub fn new(
        client_event_dispatcher: DynClientEventDispatcher,
        notifications_repo: DynNotificationsRepository,
        time_provider: DynTimeProvider,
    ) -> Self {
        Self {
            client_event_dispatcher,
            notifications_repo,
            time_provider,
            last_id: AtomicI64::new(0),
        }
    }

    /// Ids are derived from the wall clock but forced strictly monotonic so
    /// that two events within the same millisecond stay ordered.
    fn next_id(&self, now_millis: i64) -> NotificationId {
        let id = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_millis.max(last + 1))
            })
            .unwrap_or(now_millis);
        NotificationId::new(id)
    }
}

#[async_trait]
impl NotificationsDomainServiceTrait for NotificationsDomainService {
    async fn emit(
        &self,
        kind: NotificationKind,
        text: String,
        peer: Option<PeerRef>,
    ) -> Result<Notification> {
        let now = self.time_provider.now();
        let notification = Notification {
            id: self.next_id(now.timestamp_millis()),
            kind,
            text,
            peer,
            is_read: false,
            timestamp: now,
        };

        self.notifications_repo
            .prepend(notification.clone())
            .await?;
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::NotificationsChanged);

        Ok(notification)
    }

    async fn load_notifications(&self) -> Result<Vec<Notification>> {
        self.notifications_repo.get_all().await
    }

    async fn unread_count(&self) -> Result<usize> {
        self.notifications_repo.unread_count().await
    }

    async fn mark_read(&self, id: NotificationId) -> Result<()> {
        if self.notifications_repo.mark_read(id).await? {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::NotificationsChanged);
        }
        Ok(())
    }

    async fn mark_read_for_peer(&self, peer_id: &UserId) -> Result<()> {
        if self.notifications_repo.mark_read_for_peer(peer_id).await? {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::NotificationsChanged);
        }
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<()> {
        if self.notifications_repo.mark_all_read().await? {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::NotificationsChanged);
        }
        Ok(())
    }

    async fn clear_cache(&self) -> Result<()> {
        self.notifications_repo.clear().await
    }
}
