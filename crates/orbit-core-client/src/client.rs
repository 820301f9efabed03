// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::ClientBuilder;
use crate::dtos::UserId;
use crate::services::{
    AccountService, ConnectionsService, DirectoryService, NotificationsService, RoomsService,
};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub connections: ConnectionsService,
    pub(crate) ctx: DynAppContext,
    pub directory: DirectoryService,
    pub notifications: NotificationsService,
    pub rooms: RoomsService,
    #[cfg(feature = "test")]
    pub(crate) server_event_queue: crate::app::deps::DynServerEventHandlerQueue,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn signed_in_user_id(&self) -> Option<UserId> {
        self.ctx.signed_in_user_id().ok()
    }
}

#[cfg(feature = "test")]
impl Client {
    /// Feeds an event into the realtime handler queue, as a connected
    /// backend subscription would.
    pub async fn simulate_server_event(&self, event: crate::app::event_handlers::ServerEvent) {
        self.server_event_queue.handle_event(event).await
    }
}
