// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::Availability;
pub use room_id::RoomId;
pub use user_id::UserId;

mod availability;
mod room_id;
mod user_id;

/// Error parsing an identifier from a string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier cannot be empty")]
    Empty,
}
