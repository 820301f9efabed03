// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use orbit_core_client::{Client, ClientDelegate, ClientEvent};

/// Shared record of every event the client dispatched.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl EventLog {
    pub fn drain(&self) -> Vec<ClientEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn contains(&self, event: &ClientEvent) -> bool {
        self.events.lock().contains(event)
    }
}

pub struct CapturingDelegate {
    log: EventLog,
}

impl CapturingDelegate {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl ClientDelegate for CapturingDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.log.events.lock().push(event)
    }
}
