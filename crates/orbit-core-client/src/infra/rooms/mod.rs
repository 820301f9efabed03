// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_rooms_repository::InMemoryRoomsRepository;
pub use local_room_management_service::LocalRoomManagementService;

mod in_memory_rooms_repository;
mod local_room_management_service;
