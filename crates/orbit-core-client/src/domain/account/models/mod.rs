// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_profile::{
    AccountError, AccountProfile, Credentials, PremiumPlan, PrivacySettings, SignUpRequest,
};

mod account_profile;
