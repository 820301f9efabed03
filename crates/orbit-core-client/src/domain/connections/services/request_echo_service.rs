// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use crate::domain::shared::models::UserId;

/// Stand-in for the remote party in the single-device demo flow: after a
/// delay, replays an outgoing request as an incoming one through the server
/// event queue. Outstanding echoes must not outlive the session.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RequestEchoService: Send + Sync {
    fn schedule_echo(&self, peer_id: UserId, delay: Duration);

    /// Aborts every echo that has not fired yet. Called on sign-out so a
    /// timer cannot emit into a torn-down session.
    fn cancel_pending_echoes(&self);
}
