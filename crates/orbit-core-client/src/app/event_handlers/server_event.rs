// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::UserId;

/// Events arriving over the realtime channel (or, in the single-device
/// demo, fabricated by the loopback services).
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Events about connection requests directed at us.
    Connections(ConnectionsEvent),
    /// Events about received messages.
    Messages(MessagesEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionsEvent {
    pub peer_id: UserId,
    pub r#type: ConnectionsEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionsEventType {
    /// The peer sent us a connection request.
    RequestReceived,
    /// Our outgoing request was replayed by the single-device echo. The
    /// state map must not change; only the feed is notified.
    RequestEchoed,
    /// The peer accepted our outgoing request.
    RequestAccepted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessagesEvent {
    /// A message row was inserted for one of our rooms, our own included.
    Received { message: Message },
}
