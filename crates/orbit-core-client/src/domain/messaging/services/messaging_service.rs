// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::Message;

/// Backend boundary for message records. An insert is echoed back through
/// the realtime channel; the local cache is only updated when the echo
/// arrives, for both our own and remote messages.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    async fn send_message(&self, message: &Message) -> Result<()>;
}
