// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use contact::Contact;

pub use crate::domain::{
    account::models::{
        AccountError, AccountProfile, Credentials, PremiumPlan, PrivacySettings, SignUpRequest,
    },
    connections::models::{ConnectionError, ConnectionState},
    directory::models::Peer,
    messaging::models::{
        AttachmentSource, Emoji, Message, MessageError, MessageId, SendMessageRequest,
    },
    notifications::models::{Notification, NotificationId, NotificationKind, PeerRef},
    rooms::models::{
        DiscoverFilter, GeoAnchor, GeoPoint, MemberLimit, MemberRole, Room, RoomDraft, RoomError,
        RoomVisibility, Schedule,
    },
    shared::models::{Availability, IdParseError, RoomId, UserId},
};

mod contact;
