// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::app::deps::DynServerEventHandlerQueue;
use crate::app::event_handlers::{ConnectionsEvent, ConnectionsEventType, ServerEvent};
use crate::domain::connections::services::RequestEchoService;
use crate::domain::shared::models::UserId;

/// Timer-based rendition of the remote party: replays an outgoing request
/// through the server event queue after a delay, exactly like a realtime
/// push would arrive. Every pending timer is aborted on sign-out.
pub struct TokioRequestEchoService {
    server_event_queue: DynServerEventHandlerQueue,
    pending: Arc<Mutex<HashMap<u64, JoinHandle<()>>>>,
    next_task_id: AtomicU64,
}

impl TokioRequestEchoService {
    pub fn new(server_event_queue: DynServerEventHandlerQueue) -> Self {
        Self {
            server_event_queue,
            pending: Default::default(),
            next_task_id: AtomicU64::new(0),
        }
    }
}

impl RequestEchoService for TokioRequestEchoService {
    fn schedule_echo(&self, peer_id: UserId, delay: Duration) {
        let task_id = self.next_task_id.fetch_add(1, Ordering::Relaxed);
        let pending = self.pending.clone();
        let queue = self.server_event_queue.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            queue
                .handle_event(ServerEvent::Connections(ConnectionsEvent {
                    peer_id,
                    r#type: ConnectionsEventType::RequestEchoed,
                }))
                .await;
            pending.lock().remove(&task_id);
        });

        self.pending.lock().insert(task_id, handle);
    }

    fn cancel_pending_echoes(&self) {
        for (_, handle) in self.pending.lock().drain() {
            handle.abort();
        }
    }
}

impl Drop for TokioRequestEchoService {
    fn drop(&mut self) {
        self.cancel_pending_echoes();
    }
}
