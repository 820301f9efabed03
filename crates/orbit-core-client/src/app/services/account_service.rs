// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use secrecy::Secret;

use crate::app::deps::{AppDependencies, DynAccountDomainService, DynAppContext};
use crate::dtos::{AccountProfile, Credentials, PremiumPlan, PrivacySettings, SignUpRequest};

pub struct AccountService {
    account_domain_service: DynAccountDomainService,
    ctx: DynAppContext,
}

impl From<&AppDependencies> for AccountService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            account_domain_service: deps.account_domain_service.clone(),
            ctx: deps.ctx.clone(),
        }
    }
}

impl AccountService {
    pub async fn sign_up(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: Secret<String>,
    ) -> Result<AccountProfile> {
        self.account_domain_service
            .sign_up(SignUpRequest {
                name: name.into(),
                email: email.into(),
                password,
            })
            .await
    }

    pub async fn sign_in(
        &self,
        email: impl Into<String>,
        password: Secret<String>,
    ) -> Result<AccountProfile> {
        self.account_domain_service
            .sign_in(Credentials {
                email: email.into(),
                password,
            })
            .await
    }

    pub async fn change_password(
        &self,
        new_password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<()> {
        self.account_domain_service
            .change_password(new_password, confirmation)
            .await
    }

    pub async fn select_topics(&self, topics: Vec<String>) -> Result<()> {
        self.account_domain_service.select_topics(topics).await
    }

    pub async fn update_settings(&self, settings: PrivacySettings) -> Result<()> {
        self.account_domain_service.update_settings(settings).await
    }

    pub async fn set_premium(&self, plan: PremiumPlan) -> Result<()> {
        self.account_domain_service.set_premium(plan).await
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.account_domain_service.sign_out().await
    }

    pub fn profile(&self) -> Result<AccountProfile> {
        self.ctx.signed_in_profile()
    }
}
