// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::RoomId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The signed-in session was established or torn down.
    SessionStatusChanged { event: SessionEvent },

    /// Peer connection states changed (request sent/accepted/declined or a
    /// connection was torn down).
    ConnectionsChanged,

    /// The notification feed changed (new entry or read flags updated).
    NotificationsChanged,

    /// Rooms were created, deleted, joined or left.
    RoomsChanged,

    RoomChanged {
        id: RoomId,
        r#type: ClientRoomEventType,
    },

    /// Infos related to the signed-in user have changed.
    AccountInfoChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientRoomEventType {
    /// One or many messages were either received or sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// Earlier messages were affected (e.g. a reaction was toggled).
    MessagesUpdated { message_ids: Vec<MessageId> },

    /// Attributes changed like the pinned conclusion.
    AttributesChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}
