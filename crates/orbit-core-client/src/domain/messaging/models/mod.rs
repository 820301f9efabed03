// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{
    AttachmentSource, Emoji, Message, MessageError, MessageId, SendMessageRequest,
};

mod message;
