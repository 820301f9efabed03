// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delegate::{CapturingDelegate, EventLog};
pub use test_client::{demo_peers, seed_rooms, TestClient};

mod delegate;
mod test_client;
