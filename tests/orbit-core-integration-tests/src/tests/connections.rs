// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;

use orbit_core_client::app::event_handlers::{
    ConnectionsEvent, ConnectionsEventType, ServerEvent,
};
use orbit_core_client::dtos::{ConnectionState, NotificationKind};
use orbit_core_client::{user_id, ClientEvent};

use super::helpers::TestClient;

#[tokio::test(start_paused = true)]
async fn test_maya_round_trip() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let maya = user_id!("u2");

    // None → PendingSent with exactly one request_sent notification.
    client.connections.send_request(&maya).await?;
    assert_eq!(
        client.connections.status_of(&maya).await?,
        ConnectionState::PendingSent
    );
    assert!(client.events.contains(&ClientEvent::ConnectionsChanged));

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::RequestSent);
    assert!(feed[0].text.contains("Maya Patel"));

    // The simulated remote party reacts after the configured delay.
    tokio::time::sleep(Duration::from_millis(2_100)).await;

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].kind, NotificationKind::IncomingRequest);
    assert_eq!(feed[0].peer.as_ref().unwrap().id, maya);
    // The echo never touches our own state map.
    assert_eq!(
        client.connections.status_of(&maya).await?,
        ConnectionState::PendingSent
    );

    // Accepting from the notification completes the handshake.
    client.connections.accept_connection(&maya).await?;
    assert_eq!(
        client.connections.status_of(&maya).await?,
        ConnectionState::Accepted
    );
    assert_eq!(client.connections.accepted_peers().await?, vec![maya.clone()]);

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(feed[0].kind, NotificationKind::Accepted);
    assert!(feed
        .iter()
        .filter(|n| n.references_peer(&maya))
        .all(|n| n.is_read));

    // Disconnect is silent and closes the cycle.
    let feed_len = feed.len();
    client.connections.disconnect(&maya).await?;
    assert_eq!(
        client.connections.status_of(&maya).await?,
        ConnectionState::None
    );
    assert_eq!(
        client.notifications.load_notifications().await?.len(),
        feed_len
    );

    client.connections.send_request(&maya).await?;
    assert_eq!(
        client.connections.status_of(&maya).await?,
        ConnectionState::PendingSent
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_request_is_rejected() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let sam = user_id!("u4");

    client.connections.send_request(&sam).await?;
    assert!(client.connections.send_request(&sam).await.is_err());

    assert_eq!(
        client.connections.status_of(&sam).await?,
        ConnectionState::PendingSent
    );
    assert_eq!(client.notifications.load_notifications().await?.len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_jordan_incoming_request_declined() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let jordan = user_id!("u3");

    // Pre-seed the incoming request as the realtime channel would.
    client
        .simulate_server_event(ServerEvent::Connections(ConnectionsEvent {
            peer_id: jordan.clone(),
            r#type: ConnectionsEventType::RequestReceived,
        }))
        .await;
    assert_eq!(
        client.connections.status_of(&jordan).await?,
        ConnectionState::PendingIncoming
    );

    client.connections.decline_connection(&jordan).await?;

    assert_eq!(
        client.connections.status_of(&jordan).await?,
        ConnectionState::None
    );
    assert!(client.connections.accepted_peers().await?.is_empty());

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(feed[0].kind, NotificationKind::Declined);
    assert_eq!(
        feed.iter()
            .filter(|n| n.kind == NotificationKind::Declined)
            .count(),
        1
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_repeat_accept_emits_no_duplicate() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let jordan = user_id!("u3");

    client
        .simulate_server_event(ServerEvent::Connections(ConnectionsEvent {
            peer_id: jordan.clone(),
            r#type: ConnectionsEventType::RequestReceived,
        }))
        .await;
    client.connections.accept_connection(&jordan).await?;

    let accepted_count = |feed: &[orbit_core_client::dtos::Notification]| {
        feed.iter()
            .filter(|n| n.kind == NotificationKind::Accepted)
            .count()
    };

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(accepted_count(&feed), 1);

    client.connections.accept_connection(&jordan).await?;
    let feed = client.notifications.load_notifications().await?;
    assert_eq!(accepted_count(&feed), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_remote_accept_event() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let alex = user_id!("u1");

    client.connections.send_request(&alex).await?;
    client
        .simulate_server_event(ServerEvent::Connections(ConnectionsEvent {
            peer_id: alex.clone(),
            r#type: ConnectionsEventType::RequestAccepted,
        }))
        .await;

    assert_eq!(
        client.connections.status_of(&alex).await?,
        ConnectionState::Accepted
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sign_out_cancels_pending_echo() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;
    let maya = user_id!("u2");

    client.connections.send_request(&maya).await?;
    client.account.sign_out().await?;

    // Run well past the echo delay; the aborted timer must not emit into
    // the torn-down session.
    tokio::time::sleep(Duration::from_millis(5_000)).await;

    assert!(client.notifications.load_notifications().await?.is_empty());
    assert_eq!(
        client.connections.status_of(&maya).await?,
        ConnectionState::None
    );
    Ok(())
}
