// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use connections_service::ConnectionsService;
pub use directory_service::DirectoryService;
pub use notifications_service::NotificationsService;
pub use rooms_service::RoomsService;

mod account_service;
mod connections_service;
mod directory_service;
mod notifications_service;
mod rooms_service;
