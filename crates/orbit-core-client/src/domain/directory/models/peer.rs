// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{Availability, UserId};

/// A user in the directory who can be connected with. Identities are
/// immutable for the duration of a session; the connection manager attaches
/// the display name to its notifications but never mutates a peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    pub id: UserId,
    pub name: String,
    pub handle: String,
    pub availability: Availability,
    pub initials: String,
    pub expertise: Vec<String>,
    pub bio: String,
}

impl Peer {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.handle.to_lowercase().contains(&query)
    }
}
