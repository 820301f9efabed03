// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::account::models::AccountProfile;
use crate::domain::shared::models::UserId;

pub struct AppConfig {
    /// Delay before an outgoing request is echoed back as the simulated
    /// incoming request.
    pub request_echo_delay: Duration,
    /// Rooms a non-verified account may create per rolling 24 hours.
    pub daily_room_limit: usize,
    /// Upper bound for message attachments in bytes.
    pub max_attachment_size: usize,
    pub min_password_length: usize,
    /// Topics required to finish onboarding.
    pub required_topic_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_echo_delay: Duration::from_millis(2_000),
            daily_room_limit: 5,
            max_attachment_size: 5 * 1024 * 1024,
            min_password_length: 6,
            required_topic_count: 3,
        }
    }
}

/// Session-scoped state shared by every service. Constructed per client,
/// reset on sign-out.
pub struct AppContext {
    profile: RwLock<Option<AccountProfile>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            profile: Default::default(),
            config,
        }
    }

    pub fn signed_in_profile(&self) -> Result<AccountProfile> {
        self.profile
            .read()
            .clone()
            .ok_or(anyhow::anyhow!("The client is not signed in."))
    }

    pub fn signed_in_user_id(&self) -> Result<UserId> {
        Ok(self.signed_in_profile()?.id)
    }

    pub fn set_profile(&self, profile: AccountProfile) {
        self.profile.write().replace(profile);
    }

    /// Applies `f` to the signed-in profile and returns the updated copy.
    pub fn update_profile(
        &self,
        f: impl FnOnce(&mut AccountProfile),
    ) -> Result<AccountProfile> {
        let mut guard = self.profile.write();
        let profile = guard
            .as_mut()
            .ok_or(anyhow::anyhow!("The client is not signed in."))?;
        f(profile);
        Ok(profile.clone())
    }

    pub fn reset(&self) {
        self.profile.write().take();
    }
}
