// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::{ClientEventDispatcher, ServerEventHandlerQueue};
use crate::domain::account::services::{AccountDomainService, AuthenticationService};
use crate::domain::connections::repos::ConnectionsRepository;
use crate::domain::connections::services::{ConnectionsDomainService, RequestEchoService};
use crate::domain::directory::repos::PeerDirectoryRepository;
use crate::domain::general::services::{IdProvider, TimeProvider};
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::messaging::services::{MessagingDomainService, MessagingService};
use crate::domain::notifications::repos::NotificationsRepository;
use crate::domain::notifications::services::NotificationsDomainService;
use crate::domain::rooms::repos::RoomsRepository;
use crate::domain::rooms::services::{RoomManagementService, RoomsDomainService};
use crate::domain::uploads::services::UploadService;

pub type DynAccountDomainService = Arc<dyn AccountDomainService>;
pub type DynAppContext = Arc<AppContext>;
pub type DynAuthenticationService = Arc<dyn AuthenticationService>;
pub type DynClientEventDispatcher = Arc<ClientEventDispatcher>;
pub type DynConnectionsDomainService = Arc<dyn ConnectionsDomainService>;
pub type DynConnectionsRepository = Arc<dyn ConnectionsRepository>;
pub type DynIdProvider = Arc<dyn IdProvider>;
pub type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub type DynMessagingDomainService = Arc<dyn MessagingDomainService>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynNotificationsDomainService = Arc<dyn NotificationsDomainService>;
pub type DynNotificationsRepository = Arc<dyn NotificationsRepository>;
pub type DynPeerDirectoryRepository = Arc<dyn PeerDirectoryRepository>;
pub type DynRequestEchoService = Arc<dyn RequestEchoService>;
pub type DynRoomManagementService = Arc<dyn RoomManagementService>;
pub type DynRoomsDomainService = Arc<dyn RoomsDomainService>;
pub type DynRoomsRepository = Arc<dyn RoomsRepository>;
pub type DynServerEventHandlerQueue = Arc<ServerEventHandlerQueue>;
pub type DynShortIdProvider = Arc<dyn IdProvider>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynUploadService = Arc<dyn UploadService>;

pub struct AppDependencies {
    pub account_domain_service: DynAccountDomainService,
    pub authentication_service: DynAuthenticationService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connections_domain_service: DynConnectionsDomainService,
    pub connections_repo: DynConnectionsRepository,
    pub ctx: DynAppContext,
    pub id_provider: DynIdProvider,
    pub messages_repo: DynMessagesRepository,
    pub messaging_domain_service: DynMessagingDomainService,
    pub messaging_service: DynMessagingService,
    pub notifications_domain_service: DynNotificationsDomainService,
    pub notifications_repo: DynNotificationsRepository,
    pub peer_directory_repo: DynPeerDirectoryRepository,
    pub request_echo_service: DynRequestEchoService,
    pub room_management_service: DynRoomManagementService,
    pub rooms_domain_service: DynRoomsDomainService,
    pub rooms_repo: DynRoomsRepository,
    pub server_event_queue: DynServerEventHandlerQueue,
    pub short_id_provider: DynShortIdProvider,
    pub time_provider: DynTimeProvider,
    pub upload_service: DynUploadService,
}
