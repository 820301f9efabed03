// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use url::Url;

use crate::app::deps::{
    AppDependencies, DynMessagingDomainService, DynRoomsDomainService, DynRoomsRepository,
};
use crate::domain::rooms::models::RoomError;
use crate::dtos::{
    DiscoverFilter, Emoji, Message, MessageId, Room, RoomDraft, RoomId, SendMessageRequest,
};
use crate::util::calendar;

pub struct RoomsService {
    messaging_domain_service: DynMessagingDomainService,
    rooms_domain_service: DynRoomsDomainService,
    rooms_repo: DynRoomsRepository,
}

impl From<&AppDependencies> for RoomsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            messaging_domain_service: deps.messaging_domain_service.clone(),
            rooms_domain_service: deps.rooms_domain_service.clone(),
            rooms_repo: deps.rooms_repo.clone(),
        }
    }
}

impl RoomsService {
    pub async fn load_rooms(&self) -> Result<Vec<Room>> {
        self.rooms_domain_service.load_rooms().await
    }

    pub async fn create_room(&self, draft: RoomDraft) -> Result<Room> {
        self.rooms_domain_service.create_room(draft).await
    }

    pub async fn delete_room(&self, id: &RoomId) -> Result<()> {
        self.rooms_domain_service.delete_room(id).await
    }

    pub async fn join_room(&self, id: &RoomId) -> Result<Room> {
        self.rooms_domain_service.join_room(id).await
    }

    pub async fn leave_room(&self, id: &RoomId) -> Result<()> {
        self.rooms_domain_service.leave_room(id).await
    }

    pub async fn pin_conclusion(&self, id: &RoomId, text: &str) -> Result<()> {
        self.rooms_domain_service.pin_conclusion(id, text).await
    }

    pub async fn discover(&self, filter: DiscoverFilter) -> Result<Vec<Room>> {
        self.rooms_domain_service.discover(filter).await
    }

    /// Ids of discover rooms the user has joined, for join/leave toggles.
    pub async fn joined_room_ids(&self) -> Result<Vec<RoomId>> {
        self.rooms_repo.joined_ids().await
    }

    pub async fn send_message(
        &self,
        room_id: &RoomId,
        request: SendMessageRequest,
    ) -> Result<()> {
        self.messaging_domain_service
            .send_message(room_id, request)
            .await
    }

    pub async fn load_messages(&self, room_id: &RoomId) -> Result<Vec<Message>> {
        self.messaging_domain_service.load_messages(room_id).await
    }

    pub async fn toggle_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: Emoji,
    ) -> Result<()> {
        self.messaging_domain_service
            .toggle_reaction(room_id, message_id, emoji)
            .await
    }

    /// iCalendar document for the room's scheduled session, or `None` when
    /// the room has no schedule.
    pub async fn ics_export(&self, id: &RoomId) -> Result<Option<String>> {
        let room = self.rooms_repo.get(id).await?.ok_or(RoomError::NotFound)?;
        Ok(calendar::ics_export(&room))
    }

    pub async fn google_calendar_url(&self, id: &RoomId) -> Result<Option<Url>> {
        let room = self.rooms_repo.get(id).await?.ok_or(RoomError::NotFound)?;
        Ok(calendar::google_calendar_url(&room))
    }
}
