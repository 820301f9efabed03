// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use orbit_core_client::dtos::{
    AttachmentSource, Emoji, MessageError, Room, SendMessageRequest,
};
use orbit_core_client::{ClientEvent, ClientRoomEventType};

use super::helpers::TestClient;

async fn client_with_room() -> Result<(TestClient, Room)> {
    let (client, _) = TestClient::signed_in().await?;
    let room = client.rooms.join_room(&orbit_core_client::room_id!("sr1")).await?;
    client.events.drain();
    Ok((client, room))
}

fn text_message(body: &str) -> SendMessageRequest {
    SendMessageRequest {
        body: body.to_string(),
        attachment: None,
        reply_to: None,
    }
}

#[tokio::test]
async fn test_send_message_appends_through_realtime_echo() -> Result<()> {
    let (client, room) = client_with_room().await?;

    client
        .rooms
        .send_message(&room.id, text_message("What do we owe the future?"))
        .await?;

    let messages = client.rooms.load_messages(&room.id).await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "What do we owe the future?");
    assert_eq!(
        client.signed_in_user_id().as_ref(),
        Some(&messages[0].author)
    );

    assert!(client.events.contains(&ClientEvent::RoomChanged {
        id: room.id.clone(),
        r#type: ClientRoomEventType::MessagesAppended {
            message_ids: vec![messages[0].id.clone()],
        },
    }));
    Ok(())
}

#[tokio::test]
async fn test_empty_message_is_rejected() -> Result<()> {
    let (client, room) = client_with_room().await?;

    let error = client
        .rooms
        .send_message(&room.id, text_message("   "))
        .await
        .unwrap_err();
    assert_eq!(error.downcast::<MessageError>()?, MessageError::Empty);
    assert!(client.rooms.load_messages(&room.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_profanity_is_rejected_before_sending() -> Result<()> {
    let (client, room) = client_with_room().await?;

    let error = client
        .rooms
        .send_message(&room.id, text_message("well, shit"))
        .await
        .unwrap_err();
    assert_eq!(error.downcast::<MessageError>()?, MessageError::Profanity);
    assert!(client.rooms.load_messages(&room.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_attachment_only_message() -> Result<()> {
    let (client, room) = client_with_room().await?;

    client
        .rooms
        .send_message(
            &room.id,
            SendMessageRequest {
                body: String::new(),
                attachment: Some(AttachmentSource {
                    filename: "diagram.png".to_string(),
                    media_type: "image/png".to_string(),
                    data: vec![0u8; 128],
                }),
                reply_to: None,
            },
        )
        .await?;

    let messages = client.rooms.load_messages(&room.id).await?;
    assert_eq!(messages.len(), 1);
    let url = messages[0].attachment_url.as_ref().unwrap();
    assert!(url.path().ends_with("diagram.png"));
    Ok(())
}

#[tokio::test]
async fn test_oversized_attachment_is_rejected() -> Result<()> {
    let (client, room) = client_with_room().await?;

    let error = client
        .rooms
        .send_message(
            &room.id,
            SendMessageRequest {
                body: String::new(),
                attachment: Some(AttachmentSource {
                    filename: "huge.bin".to_string(),
                    media_type: "application/octet-stream".to_string(),
                    data: vec![0u8; 5 * 1024 * 1024 + 1],
                }),
                reply_to: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(
        error.downcast::<MessageError>()?,
        MessageError::AttachmentTooLarge {
            max_bytes: 5 * 1024 * 1024
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_reply_and_reaction() -> Result<()> {
    let (client, room) = client_with_room().await?;

    client
        .rooms
        .send_message(&room.id, text_message("Opening statement"))
        .await?;
    let first = client.rooms.load_messages(&room.id).await?[0].clone();

    client
        .rooms
        .send_message(
            &room.id,
            SendMessageRequest {
                body: "Strong agree".to_string(),
                attachment: None,
                reply_to: Some(first.id.clone()),
            },
        )
        .await?;

    let messages = client.rooms.load_messages(&room.id).await?;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].reply_to.as_ref(), Some(&first.id));

    client
        .rooms
        .toggle_reaction(&room.id, &first.id, Emoji::new("💡"))
        .await?;
    let messages = client.rooms.load_messages(&room.id).await?;
    assert_eq!(messages[0].reactions, vec![Emoji::new("💡")]);

    client
        .rooms
        .toggle_reaction(&room.id, &first.id, Emoji::new("💡"))
        .await?;
    let messages = client.rooms.load_messages(&room.id).await?;
    assert!(messages[0].reactions.is_empty());
    Ok(())
}
