// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynAccountDomainService, DynAppContext,
    DynAuthenticationService, DynClientEventDispatcher, DynConnectionsDomainService,
    DynConnectionsRepository, DynIdProvider, DynMessagesRepository, DynMessagingDomainService,
    DynMessagingService, DynNotificationsDomainService, DynNotificationsRepository,
    DynPeerDirectoryRepository, DynRequestEchoService, DynRoomManagementService,
    DynRoomsDomainService, DynRoomsRepository, DynServerEventHandlerQueue, DynTimeProvider,
    DynUploadService,
};
use crate::app::event_handlers::{
    ClientEventDispatcher, ConnectionsEventHandler, MessagesEventHandler, ServerEventHandlerQueue,
};
use crate::client::ClientInner;
use crate::domain::account::services::impls::AccountDomainService;
use crate::domain::connections::services::impls::ConnectionsDomainService;
use crate::domain::directory::models::Peer;
use crate::domain::general::services::{IdProvider, TimeProvider};
use crate::domain::messaging::services::impls::MessagingDomainService;
use crate::domain::notifications::services::impls::NotificationsDomainService;
use crate::domain::rooms::models::Room;
use crate::domain::rooms::services::impls::RoomsDomainService;
use crate::infra::account::InMemoryAuthenticationService;
use crate::infra::connections::{InMemoryConnectionsRepository, TokioRequestEchoService};
use crate::infra::directory::InMemoryPeerDirectoryRepository;
use crate::infra::general::{NanoIdProvider, SystemTimeProvider, UuidIdProvider};
use crate::infra::messaging::{InMemoryMessagesRepository, LoopbackMessagingService};
use crate::infra::notifications::InMemoryNotificationsRepository;
use crate::infra::rooms::{InMemoryRoomsRepository, LocalRoomManagementService};
use crate::infra::uploads::InMemoryUploadService;
use crate::services::{
    AccountService, ConnectionsService, DirectoryService, NotificationsService, RoomsService,
};
use crate::{Client, ClientDelegate};

pub struct ClientBuilder {
    config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIdProvider,
    peers: Vec<Peer>,
    seed_public_rooms: Vec<Room>,
    short_id_provider: DynIdProvider,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: Default::default(),
            delegate: None,
            id_provider: Arc::new(UuidIdProvider),
            peers: vec![],
            seed_public_rooms: vec![],
            short_id_provider: Arc::new(NanoIdProvider),
            time_provider: Arc::new(SystemTimeProvider),
        }
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_id_provider<P: IdProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_short_id_provider<P: IdProvider + 'static>(mut self, id_provider: P) -> Self {
        self.short_id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    /// Seeds the peer directory for the session.
    pub fn set_directory(mut self, peers: Vec<Peer>) -> Self {
        self.peers = peers;
        self
    }

    /// Seeds the public rooms the discover listing starts from.
    pub fn set_seed_public_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.seed_public_rooms = rooms;
        self
    }

    pub fn build(self) -> Client {
        let server_event_queue: DynServerEventHandlerQueue =
            Arc::new(ServerEventHandlerQueue::new());
        let client_event_dispatcher: DynClientEventDispatcher =
            Arc::new(ClientEventDispatcher::new(self.delegate));
        let ctx: DynAppContext = Arc::new(AppContext::new(self.config));

        let connections_repo: DynConnectionsRepository =
            Arc::new(InMemoryConnectionsRepository::new());
        let messages_repo: DynMessagesRepository = Arc::new(InMemoryMessagesRepository::new());
        let notifications_repo: DynNotificationsRepository =
            Arc::new(InMemoryNotificationsRepository::new());
        let peer_directory_repo: DynPeerDirectoryRepository =
            Arc::new(InMemoryPeerDirectoryRepository::new(self.peers));
        let rooms_repo: DynRoomsRepository = Arc::new(InMemoryRoomsRepository::new());

        let authentication_service: DynAuthenticationService =
            Arc::new(InMemoryAuthenticationService::new());
        let messaging_service: DynMessagingService =
            Arc::new(LoopbackMessagingService::new(server_event_queue.clone()));
        let request_echo_service: DynRequestEchoService =
            Arc::new(TokioRequestEchoService::new(server_event_queue.clone()));
        let room_management_service: DynRoomManagementService =
            Arc::new(LocalRoomManagementService::new(self.seed_public_rooms));
        let upload_service: DynUploadService =
            Arc::new(InMemoryUploadService::new(self.short_id_provider.clone()));

        let notifications_domain_service: DynNotificationsDomainService =
            Arc::new(NotificationsDomainService::new(
                client_event_dispatcher.clone(),
                notifications_repo.clone(),
                self.time_provider.clone(),
            ));

        let connections_domain_service: DynConnectionsDomainService =
            Arc::new(ConnectionsDomainService::new(
                client_event_dispatcher.clone(),
                connections_repo.clone(),
                ctx.clone(),
                notifications_domain_service.clone(),
                peer_directory_repo.clone(),
                request_echo_service.clone(),
            ));

        let messaging_domain_service: DynMessagingDomainService =
            Arc::new(MessagingDomainService::new(
                client_event_dispatcher.clone(),
                ctx.clone(),
                messages_repo.clone(),
                messaging_service.clone(),
                self.short_id_provider.clone(),
                self.time_provider.clone(),
                upload_service.clone(),
            ));

        let rooms_domain_service: DynRoomsDomainService = Arc::new(RoomsDomainService::new(
            client_event_dispatcher.clone(),
            ctx.clone(),
            self.id_provider.clone(),
            messages_repo.clone(),
            notifications_domain_service.clone(),
            room_management_service.clone(),
            rooms_repo.clone(),
            self.time_provider.clone(),
        ));

        let account_domain_service: DynAccountDomainService =
            Arc::new(AccountDomainService::new(
                authentication_service.clone(),
                client_event_dispatcher.clone(),
                connections_repo.clone(),
                ctx.clone(),
                self.id_provider.clone(),
                messages_repo.clone(),
                notifications_domain_service.clone(),
                notifications_repo.clone(),
                request_echo_service.clone(),
                rooms_repo.clone(),
            ));

        let dependencies = AppDependencies {
            account_domain_service,
            authentication_service,
            client_event_dispatcher: client_event_dispatcher.clone(),
            connections_domain_service,
            connections_repo,
            ctx,
            id_provider: self.id_provider,
            messages_repo,
            messaging_domain_service,
            messaging_service,
            notifications_domain_service,
            notifications_repo,
            peer_directory_repo,
            request_echo_service,
            room_management_service,
            rooms_domain_service,
            rooms_repo,
            server_event_queue: server_event_queue.clone(),
            short_id_provider: self.short_id_provider,
            time_provider: self.time_provider,
            upload_service,
        };

        server_event_queue.set_handlers(vec![
            Box::new(ConnectionsEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            connections: ConnectionsService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            directory: DirectoryService::from(&dependencies),
            notifications: NotificationsService::from(&dependencies),
            rooms: RoomsService::from(&dependencies),
            #[cfg(feature = "test")]
            server_event_queue: dependencies.server_event_queue.clone(),
        });

        client_event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
