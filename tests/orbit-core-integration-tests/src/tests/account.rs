// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use orbit_core_client::dtos::{AccountError, NotificationKind, PremiumPlan, PrivacySettings};
use orbit_core_client::{ClientEvent, SessionEvent};

use super::helpers::TestClient;

fn secret(s: &str) -> Secret<String> {
    Secret::new(s.to_string())
}

#[tokio::test]
async fn test_sign_up_derives_handle_and_initials() -> Result<()> {
    let client = TestClient::new();

    let profile = client
        .account
        .sign_up("Riley Santos", "riley@example.com", secret("hunter22"))
        .await?;

    assert_eq!(profile.handle, "@rileysantos");
    assert_eq!(profile.initials, "RS");
    assert!(!profile.is_verified());
    assert_eq!(client.signed_in_user_id(), Some(profile.id.clone()));
    assert!(client.events.contains(&ClientEvent::SessionStatusChanged {
        event: SessionEvent::SignedIn
    }));
    Ok(())
}

#[tokio::test]
async fn test_sign_up_validation() -> Result<()> {
    let client = TestClient::new();

    let error = client
        .account
        .sign_up("Riley Santos", "  ", secret("hunter22"))
        .await
        .unwrap_err();
    assert_eq!(error.downcast::<AccountError>()?, AccountError::EmptyEmail);

    let error = client
        .account
        .sign_up("  ", "riley@example.com", secret("hunter22"))
        .await
        .unwrap_err();
    assert_eq!(error.downcast::<AccountError>()?, AccountError::EmptyName);

    let error = client
        .account
        .sign_up("Riley Santos", "riley@example.com", secret("short"))
        .await
        .unwrap_err();
    assert_eq!(
        error.downcast::<AccountError>()?,
        AccountError::PasswordTooShort { min: 6 }
    );

    assert_eq!(client.signed_in_user_id(), None);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_and_wrong_password() -> Result<()> {
    let client = TestClient::new();

    client
        .account
        .sign_up("Riley Santos", "riley@example.com", secret("hunter22"))
        .await?;

    let error = client
        .account
        .sign_up("Someone Else", "riley@example.com", secret("hunter23"))
        .await
        .unwrap_err();
    assert_eq!(error.downcast::<AccountError>()?, AccountError::EmailTaken);

    client.account.sign_out().await?;

    let error = client
        .account
        .sign_in("riley@example.com", secret("wrong-password"))
        .await
        .unwrap_err();
    assert_eq!(
        error.downcast::<AccountError>()?,
        AccountError::InvalidCredentials
    );

    let profile = client
        .account
        .sign_in("riley@example.com", secret("hunter22"))
        .await?;
    assert_eq!(profile.handle, "@rileysantos");
    Ok(())
}

#[tokio::test]
async fn test_change_password() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let error = client
        .account
        .change_password(secret("newpassword"), secret("different"))
        .await
        .unwrap_err();
    assert_eq!(
        error.downcast::<AccountError>()?,
        AccountError::PasswordMismatch
    );

    let error = client
        .account
        .change_password(secret("tiny"), secret("tiny"))
        .await
        .unwrap_err();
    assert_eq!(
        error.downcast::<AccountError>()?,
        AccountError::PasswordTooShort { min: 6 }
    );

    client
        .account
        .change_password(secret("newpassword"), secret("newpassword"))
        .await?;

    client.account.sign_out().await?;
    assert!(client
        .account
        .sign_in("riley@example.com", secret("hunter22"))
        .await
        .is_err());
    client
        .account
        .sign_in("riley@example.com", secret("newpassword"))
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_onboarding_topics() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let error = client
        .account
        .select_topics(vec!["Philosophy".to_string()])
        .await
        .unwrap_err();
    assert_eq!(
        error.downcast::<AccountError>()?,
        AccountError::TooFewTopics { required: 3 }
    );

    client
        .account
        .select_topics(vec![
            "Philosophy".to_string(),
            "AI Research".to_string(),
            "Urban Planning".to_string(),
        ])
        .await?;

    assert_eq!(client.account.profile()?.topics.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_premium_upgrade() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    client.account.set_premium(PremiumPlan::Yearly).await?;

    let profile = client.account.profile()?;
    assert!(profile.is_verified());
    assert_eq!(profile.premium, Some(PremiumPlan::Yearly));

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(feed[0].kind, NotificationKind::System);
    assert!(feed[0].text.contains("Orbit Thread Premium"));
    Ok(())
}

#[tokio::test]
async fn test_update_settings() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    client
        .account
        .update_settings(PrivacySettings {
            profile_public: false,
            show_status: false,
            allow_connect: true,
            email_notifications: true,
        })
        .await?;

    let profile = client.account.profile()?;
    assert!(!profile.settings.profile_public);
    assert!(profile.settings.email_notifications);
    Ok(())
}

#[tokio::test]
async fn test_sign_out_resets_all_state() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let maya = orbit_core_client::user_id!("u2");

    client.connections.send_request(&maya).await?;
    client
        .rooms
        .join_room(&orbit_core_client::room_id!("sr1"))
        .await?;
    client.notifications.post_system_message("hello").await?;

    client.account.sign_out().await?;

    assert_eq!(client.signed_in_user_id(), None);
    assert!(client.notifications.load_notifications().await?.is_empty());
    assert!(client.rooms.load_rooms().await?.is_empty());
    assert!(client.connections.accepted_peers().await?.is_empty());
    assert!(client.account.profile().is_err());
    assert!(client.events.contains(&ClientEvent::SessionStatusChanged {
        event: SessionEvent::SignedOut
    }));
    Ok(())
}
