// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{IdParseError, RoomId, UserId};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Debug for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MessageId({})", self.0)
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(IdParseError::Empty);
        }
        Ok(MessageId(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emoji(String);

impl Emoji {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A message in a room's discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub room_id: RoomId,
    pub author: UserId,
    pub body: String,
    pub attachment_url: Option<Url>,
    pub reply_to: Option<MessageId>,
    pub reactions: Vec<Emoji>,
    pub timestamp: DateTime<Utc>,
}

/// An attachment the user picked, not yet uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentSource {
    pub filename: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Input for sending a message into a room.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SendMessageRequest {
    pub body: String,
    pub attachment: Option<AttachmentSource>,
    pub reply_to: Option<MessageId>,
}

/// Validation errors raised before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("a message needs a body or an attachment")]
    Empty,
    #[error("message was rejected by the profanity filter")]
    Profanity,
    #[error("attachment exceeds the maximum size of {max_bytes} bytes")]
    AttachmentTooLarge { max_bytes: usize },
}
