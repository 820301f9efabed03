// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod connections;
pub mod directory;
pub mod general;
pub mod messaging;
pub mod notifications;
pub mod rooms;
pub mod shared;
pub mod uploads;
