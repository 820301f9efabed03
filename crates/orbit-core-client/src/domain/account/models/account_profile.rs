// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PremiumPlan {
    Monthly,
    Yearly,
}

/// Per-account privacy toggles from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_public: bool,
    pub show_status: bool,
    pub allow_connect: bool,
    pub email_notifications: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_public: true,
            show_status: true,
            allow_connect: true,
            email_notifications: false,
        }
    }
}

/// The signed-in user's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: UserId,
    pub name: String,
    pub handle: String,
    pub initials: String,
    pub email: String,
    pub topics: Vec<String>,
    pub settings: PrivacySettings,
    pub premium: Option<PremiumPlan>,
}

impl AccountProfile {
    /// Verified accounts are exempt from the daily room-creation quota.
    pub fn is_verified(&self) -> bool {
        self.premium.is_some()
    }
}

/// Input for creating a new account.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

/// Input for signing into an existing account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

/// Validation errors raised before the backend is contacted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("enter your email address")]
    EmptyEmail,
    #[error("enter your name")]
    EmptyName,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("pick at least {required} topics")]
    TooFewTopics { required: usize },
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
}
