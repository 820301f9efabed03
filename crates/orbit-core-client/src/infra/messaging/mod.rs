// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_messages_repository::InMemoryMessagesRepository;
pub use loopback_messaging_service::LoopbackMessagingService;

mod in_memory_messages_repository;
mod loopback_messaging_service;
