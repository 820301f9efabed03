// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::Duration;
use itertools::Itertools;
use tracing::warn;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynIdProvider, DynMessagesRepository,
    DynNotificationsDomainService, DynRoomManagementService, DynRoomsRepository, DynTimeProvider,
};
use crate::domain::notifications::models::NotificationKind;
use crate::domain::rooms::models::{
    radius_label, DiscoverFilter, MemberRole, Room, RoomDraft, RoomError, RoomVisibility,
    WORLDWIDE_RADIUS_MILES,
};
use crate::domain::shared::models::RoomId;
use crate::util::geo::haversine_miles;
use crate::{ClientEvent, ClientRoomEventType};

use super::super::RoomsDomainService as RoomsDomainServiceTrait;

pub struct RoomsDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    id_provider: DynIdProvider,
    messages_repo: DynMessagesRepository,
    notifications_domain_service: DynNotificationsDomainService,
    room_management_service: DynRoomManagementService,
    rooms_repo: DynRoomsRepository,
    time_provider: DynTimeProvider,
}

impl RoomsDomainService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        client_event_dispatcher: DynClientEventDispatcher,
        ctx: DynAppContext,
        id_provider: DynIdProvider,
        messages_repo: DynMessagesRepository,
        notifications_domain_service: DynNotificationsDomainService,
        room_management_service: DynRoomManagementService,
        rooms_repo: DynRoomsRepository,
        time_provider: DynTimeProvider,
    ) -> Self {
        Self {
            client_event_dispatcher,
            ctx,
            id_provider,
            messages_repo,
            notifications_domain_service,
            room_management_service,
            rooms_repo,
            time_provider,
        }
    }
}

#[async_trait]
impl RoomsDomainServiceTrait for RoomsDomainService {
    async fn load_rooms(&self) -> Result<Vec<Room>> {
        self.rooms_repo.get_all().await
    }

    async fn create_room(&self, draft: RoomDraft) -> Result<Room> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(RoomError::EmptyName.into());
        }

        let profile = self.ctx.signed_in_profile()?;

        if !profile.is_verified() {
            let limit = self.ctx.config.daily_room_limit;
            let window_start = self.time_provider.now() - Duration::hours(24);
            if self.rooms_repo.creation_count_since(window_start).await? >= limit {
                self.notifications_domain_service
                    .emit(
                        NotificationKind::System,
                        format!(
                            "You've reached your daily limit of {limit} Circles. \
                             Get Verified in Settings for unlimited rooms!"
                        ),
                        None,
                    )
                    .await?;
                return Err(RoomError::DailyLimitReached { limit }.into());
            }
        }

        let visibility = draft.visibility.unwrap_or(RoomVisibility::Public);
        let description = match draft.purpose.trim() {
            "" => "No description yet.".to_string(),
            purpose => purpose.to_string(),
        };

        let mut room = Room {
            id: self.id_provider.new_id().parse::<RoomId>()?,
            name: name.to_string(),
            description,
            visibility,
            topic: draft.topic,
            creator_id: Some(profile.id.clone()),
            creator_name: profile.name.clone(),
            member_limit: draft.member_limit.effective(),
            member_count: 0,
            schedule: draft.schedule,
            // Geo anchors only make sense for discoverable rooms.
            geo: match visibility {
                RoomVisibility::Public => draft.geo,
                RoomVisibility::Private => None,
            },
            pinned_conclusion: None,
        };

        self.room_management_service.create_room(&room).await?;

        // Counter and membership rows are best-effort bookkeeping.
        if let Err(error) = self.room_management_service.record_creation(&profile.id).await {
            warn!("Failed to record room creation: {error}");
        }
        if let Err(error) = self
            .room_management_service
            .add_member(&room.id, &profile.id, MemberRole::Owner)
            .await
        {
            warn!("Failed to add room owner: {error}");
        }
        room.member_count = 1;

        self.rooms_repo.insert(room.clone()).await?;
        self.rooms_repo
            .record_creation(self.time_provider.now())
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomsChanged);

        let text = match room.visibility {
            RoomVisibility::Public => {
                let radius = room
                    .geo
                    .as_ref()
                    .map(|geo| geo.radius_label())
                    .unwrap_or_else(|| radius_label(WORLDWIDE_RADIUS_MILES));
                format!(
                    "Your room {} is now discoverable - radius: {radius}",
                    room.name
                )
            }
            RoomVisibility::Private => {
                format!("Your room {} is ready. Invite your people.", room.name)
            }
        };
        self.notifications_domain_service
            .emit(NotificationKind::System, text, None)
            .await?;

        Ok(room)
    }

    async fn delete_room(&self, id: &RoomId) -> Result<()> {
        self.room_management_service.delete_room(id).await?;
        self.rooms_repo.delete(id).await?;
        self.messages_repo.clear_room(id).await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomsChanged);
        Ok(())
    }

    async fn join_room(&self, id: &RoomId) -> Result<Room> {
        let user_id = self.ctx.signed_in_user_id()?;

        let mut room = self
            .room_management_service
            .load_public_rooms()
            .await?
            .into_iter()
            .find(|room| &room.id == id)
            .ok_or(RoomError::NotFound)?;

        self.room_management_service
            .add_member(id, &user_id, MemberRole::Member)
            .await?;

        room.member_count += 1;
        self.rooms_repo.insert(room.clone()).await?;
        self.rooms_repo.mark_joined(id).await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomsChanged);

        Ok(room)
    }

    async fn leave_room(&self, id: &RoomId) -> Result<()> {
        let user_id = self.ctx.signed_in_user_id()?;

        if let Err(error) = self.room_management_service.remove_member(id, &user_id).await {
            warn!("Failed to remove room membership: {error}");
        }

        self.rooms_repo.unmark_joined(id).await?;
        self.rooms_repo.delete(id).await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomsChanged);
        Ok(())
    }

    async fn pin_conclusion(&self, id: &RoomId, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RoomError::EmptyConclusion.into());
        }

        let user_id = self.ctx.signed_in_user_id()?;
        let Some(mut room) = self.rooms_repo.get(id).await? else {
            return Err(RoomError::NotFound.into());
        };

        self.room_management_service
            .set_pinned_conclusion(id, text, &user_id)
            .await?;

        room.pinned_conclusion = Some(text.to_string());
        let room_name = room.name.clone();
        self.rooms_repo.update(room).await?;

        self.notifications_domain_service
            .emit(
                NotificationKind::System,
                format!("Conclusion pinned in {room_name}."),
                None,
            )
            .await?;
        self.client_event_dispatcher.dispatch_event(ClientEvent::RoomChanged {
            id: id.clone(),
            r#type: ClientRoomEventType::AttributesChanged,
        });

        Ok(())
    }

    async fn discover(&self, filter: DiscoverFilter) -> Result<Vec<Room>> {
        let rooms = self.room_management_service.load_public_rooms().await?;

        let rooms = rooms
            .into_iter()
            .filter(|room| room.visibility == RoomVisibility::Public)
            .filter(|room| match &filter.topic {
                Some(topic) => room.topic.as_deref() == Some(topic.as_str()),
                None => true,
            })
            .filter(|room| {
                let (Some(origin), Some(geo)) = (&filter.origin, &room.geo) else {
                    return true;
                };
                geo.is_worldwide()
                    || haversine_miles(origin.lat, origin.lng, geo.point.lat, geo.point.lng)
                        <= geo.radius_miles
            })
            .sorted_by(|a, b| b.member_count.cmp(&a.member_count))
            .collect();

        Ok(rooms)
    }

    async fn clear_cache(&self) -> Result<()> {
        self.rooms_repo.clear().await
    }
}
