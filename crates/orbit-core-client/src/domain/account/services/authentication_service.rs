// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::account::models::AccountProfile;
use crate::domain::shared::models::UserId;

/// Backend boundary for auth and profile records.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthenticationService: Send + Sync {
    async fn sign_up(&self, profile: &AccountProfile, password: &Secret<String>) -> Result<()>;
    async fn sign_in(&self, email: &str, password: &Secret<String>) -> Result<AccountProfile>;

    async fn change_password(
        &self,
        user_id: &UserId,
        new_password: &Secret<String>,
    ) -> Result<()>;

    /// Overwrites the stored profile record. Best-effort from the caller's
    /// point of view.
    async fn update_profile(&self, profile: &AccountProfile) -> Result<()>;

    async fn sign_out(&self, user_id: &UserId) -> Result<()>;
}
