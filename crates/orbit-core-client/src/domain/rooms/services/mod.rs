// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_management_service::RoomManagementService;
pub use rooms_domain_service::RoomsDomainService;

mod room_management_service;
mod rooms_domain_service;

pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::room_management_service::MockRoomManagementService;
    pub use super::rooms_domain_service::MockRoomsDomainService;
}
