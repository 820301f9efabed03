// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::connections::models::ConnectionState;
use crate::domain::shared::models::{Availability, UserId};

/// A directory peer enriched with the caller's relationship to them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: UserId,
    pub name: String,
    pub handle: String,
    pub availability: Availability,
    pub initials: String,
    pub expertise: Vec<String>,
    pub bio: String,
    pub connection_state: ConnectionState,
}
