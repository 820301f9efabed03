// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;

use orbit_core_client::dtos::{
    DiscoverFilter, GeoAnchor, GeoPoint, MemberLimit, NotificationKind, PremiumPlan, RoomDraft,
    RoomError, RoomVisibility, Schedule,
};
use orbit_core_client::room_id;

use super::helpers::TestClient;

fn draft(name: &str) -> RoomDraft {
    RoomDraft {
        name: name.to_string(),
        purpose: "Hard problems, good faith.".to_string(),
        visibility: Some(RoomVisibility::Public),
        topic: Some("Systems Design".to_string()),
        member_limit: MemberLimit::Preset(50),
        schedule: None,
        geo: None,
    }
}

#[tokio::test]
async fn test_create_room_requires_a_name() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let error = client.rooms.create_room(draft("   ")).await.unwrap_err();
    assert_eq!(error.downcast::<RoomError>()?, RoomError::EmptyName);
    assert!(client.rooms.load_rooms().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_create_public_room_with_geo() -> Result<()> {
    let (client, profile) = TestClient::signed_in().await?;

    let mut draft = draft("Distributed Systems Club");
    draft.geo = Some(GeoAnchor {
        point: GeoPoint {
            lat: 37.77,
            lng: -122.42,
        },
        radius_miles: 25.0,
    });

    let room = client.rooms.create_room(draft).await?;

    assert_eq!(room.creator_id.as_ref(), Some(&profile.id));
    assert_eq!(room.member_count, 1);
    assert_eq!(room.member_limit, 50);

    let rooms = client.rooms.load_rooms().await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, room.id);

    let feed = client.notifications.load_notifications().await?;
    assert!(feed[0].text.contains("now discoverable"));
    assert!(feed[0].text.contains("25 miles"));
    Ok(())
}

#[tokio::test]
async fn test_private_room_drops_geo_and_gets_private_copy() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let mut draft = draft("Reading Group");
    draft.visibility = Some(RoomVisibility::Private);
    draft.geo = Some(GeoAnchor {
        point: GeoPoint { lat: 0.0, lng: 0.0 },
        radius_miles: 5.0,
    });

    let room = client.rooms.create_room(draft).await?;
    assert_eq!(room.geo, None);

    let feed = client.notifications.load_notifications().await?;
    assert!(feed[0].text.contains("Invite your people."));
    Ok(())
}

#[tokio::test]
async fn test_custom_member_limit_is_capped() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let mut draft = draft("Big Tent");
    draft.member_limit = MemberLimit::Custom(5_000);

    let room = client.rooms.create_room(draft).await?;
    assert_eq!(room.member_limit, 1_000);
    Ok(())
}

#[tokio::test]
async fn test_daily_creation_limit() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    for i in 0..5 {
        client.rooms.create_room(draft(&format!("Room {i}"))).await?;
    }

    let error = client.rooms.create_room(draft("One Too Many")).await.unwrap_err();
    assert_eq!(
        error.downcast::<RoomError>()?,
        RoomError::DailyLimitReached { limit: 5 }
    );

    let feed = client.notifications.load_notifications().await?;
    assert_eq!(feed[0].kind, NotificationKind::System);
    assert!(feed[0].text.contains("daily limit"));
    assert_eq!(client.rooms.load_rooms().await?.len(), 5);

    // Verified accounts are exempt from the quota.
    client.account.set_premium(PremiumPlan::Monthly).await?;
    client.rooms.create_room(draft("Premium Room")).await?;
    assert_eq!(client.rooms.load_rooms().await?.len(), 6);
    Ok(())
}

#[tokio::test]
async fn test_discover_filters_by_topic_and_radius() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    // Topic filter alone.
    let fintech = client
        .rooms
        .discover(DiscoverFilter {
            topic: Some("Fintech".to_string()),
            origin: None,
        })
        .await?;
    assert_eq!(fintech.len(), 1);
    assert_eq!(fintech[0].name, "DeFi Deep Dive");

    // From San Francisco: the worldwide room passes, the NYC room
    // (100 mile radius) and the LA room (25 mile radius) do not.
    let nearby = client
        .rooms
        .discover(DiscoverFilter {
            topic: None,
            origin: Some(GeoPoint {
                lat: 37.77,
                lng: -122.42,
            }),
        })
        .await?;
    let names = nearby.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["AI Ethics Roundtable"]);

    // From Los Angeles the 25 mile DeFi room appears as well.
    let la = client
        .rooms
        .discover(DiscoverFilter {
            topic: None,
            origin: Some(GeoPoint {
                lat: 34.05,
                lng: -118.24,
            }),
        })
        .await?;
    assert_eq!(la.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_join_and_leave_discover_room() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let room = client.rooms.join_room(&room_id!("sr1")).await?;
    assert_eq!(room.member_count, 25);
    assert_eq!(client.rooms.load_rooms().await?.len(), 1);
    assert_eq!(client.rooms.joined_room_ids().await?, vec![room_id!("sr1")]);

    client.rooms.leave_room(&room_id!("sr1")).await?;
    assert!(client.rooms.load_rooms().await?.is_empty());
    assert!(client.rooms.joined_room_ids().await?.is_empty());

    let discover = client.rooms.discover(DiscoverFilter::default()).await?;
    let roundtable = discover
        .iter()
        .find(|r| r.id == room_id!("sr1"))
        .unwrap();
    assert_eq!(roundtable.member_count, 24);
    Ok(())
}

#[tokio::test]
async fn test_pin_conclusion() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let room = client.rooms.create_room(draft("Decision Forum")).await?;

    assert!(client.rooms.pin_conclusion(&room.id, "  ").await.is_err());

    client
        .rooms
        .pin_conclusion(&room.id, "We ship on Fridays.")
        .await?;

    let rooms = client.rooms.load_rooms().await?;
    assert_eq!(
        rooms[0].pinned_conclusion.as_deref(),
        Some("We ship on Fridays.")
    );

    let feed = client.notifications.load_notifications().await?;
    assert!(feed[0].text.contains("Conclusion pinned in Decision Forum"));
    Ok(())
}

#[tokio::test]
async fn test_calendar_exports() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let mut scheduled_draft = draft("Scheduled Salon");
    scheduled_draft.schedule = Some(Schedule {
        date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
        time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    });
    let scheduled = client.rooms.create_room(scheduled_draft).await?;

    let ics = client.rooms.ics_export(&scheduled.id).await?.unwrap();
    assert!(ics.contains("SUMMARY:Scheduled Salon · Orbit Thread"));
    assert!(ics.contains("DTSTART:20250704T190000Z"));
    assert!(ics.contains("DTEND:20250704T210000Z"));

    let url = client
        .rooms
        .google_calendar_url(&scheduled.id)
        .await?
        .unwrap();
    assert_eq!(url.domain(), Some("calendar.google.com"));

    let unscheduled = client.rooms.create_room(draft("No Date")).await?;
    assert_eq!(client.rooms.ics_export(&unscheduled.id).await?, None);
    Ok(())
}
