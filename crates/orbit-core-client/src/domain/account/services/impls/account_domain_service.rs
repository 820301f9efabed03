// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tracing::{info, warn};

use crate::app::deps::{
    DynAppContext, DynAuthenticationService, DynClientEventDispatcher, DynConnectionsRepository,
    DynIdProvider, DynMessagesRepository, DynNotificationsDomainService,
    DynNotificationsRepository, DynRequestEchoService, DynRoomsRepository,
};
use crate::domain::account::models::{
    AccountError, AccountProfile, Credentials, PremiumPlan, PrivacySettings, SignUpRequest,
};
use crate::domain::notifications::models::NotificationKind;
use crate::domain::shared::models::UserId;
use crate::util::StringExt;
use crate::{ClientEvent, SessionEvent};

use super::super::AccountDomainService as AccountDomainServiceTrait;

pub struct AccountDomainService {
    authentication_service: DynAuthenticationService,
    client_event_dispatcher: DynClientEventDispatcher,
    connections_repo: DynConnectionsRepository,
    ctx: DynAppContext,
    id_provider: DynIdProvider,
    messages_repo: DynMessagesRepository,
    notifications_domain_service: DynNotificationsDomainService,
    notifications_repo: DynNotificationsRepository,
    request_echo_service: DynRequestEchoService,
    rooms_repo: DynRoomsRepository,
}

impl AccountDomainService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authentication_service: DynAuthenticationService,
        client_event_dispatcher: DynClientEventDispatcher,
        connections_repo: DynConnectionsRepository,
        ctx: DynAppContext,
        id_provider: DynIdProvider,
        messages_repo: DynMessagesRepository,
        notifications_domain_service: DynNotificationsDomainService,
        notifications_repo: DynNotificationsRepository,
        request_echo_service: DynRequestEchoService,
        rooms_repo: DynRoomsRepository,
    ) -> Self {
        Self {
            authentication_service,
            client_event_dispatcher,
            connections_repo,
            ctx,
            id_provider,
            messages_repo,
            notifications_domain_service,
            notifications_repo,
            request_echo_service,
            rooms_repo,
        }
    }

    fn validate_password(&self, password: &Secret<String>) -> Result<(), AccountError> {
        let min = self.ctx.config.min_password_length;
        if password.expose_secret().chars().count() < min {
            return Err(AccountError::PasswordTooShort { min });
        }
        Ok(())
    }

    fn start_session(&self, profile: &AccountProfile) {
        self.ctx.set_profile(profile.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionStatusChanged {
                event: SessionEvent::SignedIn,
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
    }

    async fn save_profile(&self, profile: &AccountProfile) {
        // Fire-and-forget, like every other profile write in the app.
        if let Err(error) = self.authentication_service.update_profile(profile).await {
            warn!("Failed to update profile record: {error}");
        }
    }
}

#[async_trait]
impl AccountDomainServiceTrait for AccountDomainService {
    async fn sign_up(&self, request: SignUpRequest) -> Result<AccountProfile> {
        let email = request.email.trim();
        let name = request.name.trim();

        if email.is_empty() {
            return Err(AccountError::EmptyEmail.into());
        }
        if name.is_empty() {
            return Err(AccountError::EmptyName.into());
        }
        self.validate_password(&request.password)?;

        let profile = AccountProfile {
            id: self.id_provider.new_id().parse::<UserId>()?,
            name: name.to_string(),
            handle: name.as_handle(),
            initials: name.initials(),
            email: email.to_string(),
            topics: vec![],
            settings: PrivacySettings::default(),
            premium: None,
        };

        self.authentication_service
            .sign_up(&profile, &request.password)
            .await?;

        info!("Signed up {}", profile.handle);
        self.start_session(&profile);

        Ok(profile)
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<AccountProfile> {
        let email = credentials.email.trim();
        if email.is_empty() {
            return Err(AccountError::EmptyEmail.into());
        }
        if credentials.password.expose_secret().is_empty() {
            return Err(AccountError::PasswordTooShort {
                min: self.ctx.config.min_password_length,
            }
            .into());
        }

        let profile = self
            .authentication_service
            .sign_in(email, &credentials.password)
            .await?;

        info!("Signed in {}", profile.handle);
        self.start_session(&profile);

        Ok(profile)
    }

    async fn change_password(
        &self,
        new_password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<()> {
        self.validate_password(&new_password)?;
        if new_password.expose_secret() != confirmation.expose_secret() {
            return Err(AccountError::PasswordMismatch.into());
        }

        let user_id = self.ctx.signed_in_user_id()?;
        self.authentication_service
            .change_password(&user_id, &new_password)
            .await
    }

    async fn select_topics(&self, topics: Vec<String>) -> Result<()> {
        let required = self.ctx.config.required_topic_count;
        if topics.len() < required {
            return Err(AccountError::TooFewTopics { required }.into());
        }

        let profile = self.ctx.update_profile(|profile| {
            profile.topics = topics;
        })?;
        self.save_profile(&profile).await;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
        Ok(())
    }

    async fn update_settings(&self, settings: PrivacySettings) -> Result<()> {
        let profile = self.ctx.update_profile(|profile| {
            profile.settings = settings;
        })?;
        self.save_profile(&profile).await;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
        Ok(())
    }

    async fn set_premium(&self, plan: PremiumPlan) -> Result<()> {
        let profile = self.ctx.update_profile(|profile| {
            profile.premium = Some(plan);
        })?;
        self.save_profile(&profile).await;

        self.notifications_domain_service
            .emit(
                NotificationKind::System,
                "Welcome to Orbit Thread Premium! Verified badge, unlimited rooms, \
                 and more are now yours."
                    .to_string(),
                None,
            )
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        // Abort timers first so a late echo cannot emit into the torn-down
        // session.
        self.request_echo_service.cancel_pending_echoes();

        if let Ok(user_id) = self.ctx.signed_in_user_id() {
            if let Err(error) = self.authentication_service.sign_out(&user_id).await {
                warn!("Failed to sign out from backend: {error}");
            }
        }

        self.connections_repo.clear().await?;
        self.notifications_repo.clear().await?;
        self.rooms_repo.clear().await?;
        self.messages_repo.clear().await?;
        self.ctx.reset();

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionStatusChanged {
                event: SessionEvent::SignedOut,
            });

        Ok(())
    }
}
