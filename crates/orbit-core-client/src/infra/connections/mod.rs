// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_connections_repository::InMemoryConnectionsRepository;
pub use tokio_request_echo_service::TokioRequestEchoService;

mod in_memory_connections_repository;
mod tokio_request_echo_service;
