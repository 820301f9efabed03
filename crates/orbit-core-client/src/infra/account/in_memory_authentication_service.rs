// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::{ExposeSecret, Secret};

use crate::domain::account::models::{AccountError, AccountProfile};
use crate::domain::account::services::AuthenticationService as AuthenticationServiceTrait;
use crate::domain::shared::models::UserId;

struct StoredAccount {
    profile: AccountProfile,
    password: String,
}

/// In-process stand-in for the hosted auth service, keyed by email.
pub struct InMemoryAuthenticationService {
    accounts: Mutex<HashMap<String, StoredAccount>>,
}

impl InMemoryAuthenticationService {
    pub fn new() -> Self {
        Self {
            accounts: Default::default(),
        }
    }
}

impl Default for InMemoryAuthenticationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthenticationServiceTrait for InMemoryAuthenticationService {
    async fn sign_up(&self, profile: &AccountProfile, password: &Secret<String>) -> Result<()> {
        let mut accounts = self.accounts.lock();
        if accounts.contains_key(&profile.email) {
            return Err(AccountError::EmailTaken.into());
        }
        accounts.insert(
            profile.email.clone(),
            StoredAccount {
                profile: profile.clone(),
                password: password.expose_secret().clone(),
            },
        );
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &Secret<String>) -> Result<AccountProfile> {
        let accounts = self.accounts.lock();
        let account = accounts
            .get(email)
            .ok_or(AccountError::InvalidCredentials)?;
        if account.password != *password.expose_secret() {
            return Err(AccountError::InvalidCredentials.into());
        }
        Ok(account.profile.clone())
    }

    async fn change_password(
        &self,
        user_id: &UserId,
        new_password: &Secret<String>,
    ) -> Result<()> {
        let mut accounts = self.accounts.lock();
        let account = accounts
            .values_mut()
            .find(|account| &account.profile.id == user_id)
            .ok_or(AccountError::InvalidCredentials)?;
        account.password = new_password.expose_secret().clone();
        Ok(())
    }

    async fn update_profile(&self, profile: &AccountProfile) -> Result<()> {
        let mut accounts = self.accounts.lock();
        let account = accounts
            .get_mut(&profile.email)
            .ok_or(AccountError::InvalidCredentials)?;
        account.profile = profile.clone();
        Ok(())
    }

    async fn sign_out(&self, _user_id: &UserId) -> Result<()> {
        Ok(())
    }
}
