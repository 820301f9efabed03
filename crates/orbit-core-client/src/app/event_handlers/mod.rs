// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use client_event_dispatcher::ClientEventDispatcher;
pub use connections_event_handler::ConnectionsEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use server_event::*;

mod client_event_dispatcher;
mod connections_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod server_event;

/// Handler for events arriving over the realtime channel.
///
/// Implementors provide `handle_event`, which takes a `ServerEvent` and
/// returns an `Option<ServerEvent>`. `None` means the event was consumed;
/// `Some(event)` passes it on to the next handler in the queue.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}
