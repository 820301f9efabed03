// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

/// Time-based monotonic identifier. Two events emitted within the same
/// millisecond still receive strictly increasing ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl Debug for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NotificationId({})", self.0)
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RequestSent,
    IncomingRequest,
    Accepted,
    Declined,
    System,
}

/// Reference to the peer a notification is about. Carried as display
/// metadata so the feed can render actions without a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRef {
    pub id: UserId,
    pub name: String,
}

/// A single entry in the notification feed. Created by the connection
/// manager or by system messages; only ever mutated by marking it read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub text: String,
    pub peer: Option<PeerRef>,
    pub is_read: bool,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn references_peer(&self, peer_id: &UserId) -> bool {
        self.peer.as_ref().map(|p| &p.id) == Some(peer_id)
    }
}
