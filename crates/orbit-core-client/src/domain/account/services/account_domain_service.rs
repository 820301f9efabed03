// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::account::models::{
    AccountProfile, Credentials, PremiumPlan, PrivacySettings, SignUpRequest,
};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AccountDomainService: Send + Sync {
    /// Validates the request, derives handle and initials from the name and
    /// creates the account. The new session is signed in on success.
    async fn sign_up(&self, request: SignUpRequest) -> Result<AccountProfile>;

    async fn sign_in(&self, credentials: Credentials) -> Result<AccountProfile>;

    async fn change_password(
        &self,
        new_password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<()>;

    /// Saves the onboarding topic selection. At least the configured number
    /// of topics is required.
    async fn select_topics(&self, topics: Vec<String>) -> Result<()>;

    async fn update_settings(&self, settings: PrivacySettings) -> Result<()>;

    /// Marks the account verified and emits the premium welcome
    /// notification.
    async fn set_premium(&self, plan: PremiumPlan) -> Result<()>;

    /// Tears down the session: cancels outstanding request echoes, clears
    /// every local cache and resets the app context.
    async fn sign_out(&self) -> Result<()>;
}
