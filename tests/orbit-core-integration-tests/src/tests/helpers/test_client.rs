// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;

use anyhow::Result;
use secrecy::Secret;

use orbit_core_client::dtos::{
    AccountProfile, Availability, GeoAnchor, GeoPoint, Peer, Room, RoomVisibility,
};
use orbit_core_client::test::{ConstantTimeProvider, IncrementingIdProvider};
use orbit_core_client::{room_id, user_id, Client};

use super::delegate::{CapturingDelegate, EventLog};

pub struct TestClient {
    pub client: Client,
    pub events: EventLog,
}

impl Deref for TestClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl TestClient {
    pub fn new() -> Self {
        let events = EventLog::default();

        let client = Client::builder()
            .set_delegate(Some(Box::new(CapturingDelegate::new(events.clone()))))
            .set_id_provider(IncrementingIdProvider::new("id"))
            .set_short_id_provider(IncrementingIdProvider::new("short"))
            .set_time_provider(ConstantTimeProvider::ymd(2025, 6, 1))
            .set_directory(demo_peers())
            .set_seed_public_rooms(seed_rooms())
            .build();

        TestClient { client, events }
    }

    /// Creates and signs into a fresh account.
    pub async fn signed_in() -> Result<(Self, AccountProfile)> {
        let client = Self::new();
        let profile = client
            .account
            .sign_up(
                "Riley Santos",
                "riley@example.com",
                Secret::new("hunter22".to_string()),
            )
            .await?;
        client.events.drain();
        Ok((client, profile))
    }
}

pub fn demo_peers() -> Vec<Peer> {
    vec![
        Peer {
            id: user_id!("u1"),
            name: "Alex Chen".to_string(),
            handle: "@alexchen".to_string(),
            availability: Availability::Online,
            initials: "AC".to_string(),
            expertise: vec!["AI Research".to_string(), "Systems Design".to_string()],
            bio: "ML engineer building at the frontier.".to_string(),
        },
        Peer {
            id: user_id!("u2"),
            name: "Maya Patel".to_string(),
            handle: "@mayapatel".to_string(),
            availability: Availability::Away,
            initials: "MP".to_string(),
            expertise: vec!["Biotech".to_string(), "Genomics".to_string()],
            bio: "PhD researcher. Protein folding nerd.".to_string(),
        },
        Peer {
            id: user_id!("u3"),
            name: "Jordan Lee".to_string(),
            handle: "@jordanlee".to_string(),
            availability: Availability::Offline,
            initials: "JL".to_string(),
            expertise: vec!["Fintech".to_string()],
            bio: "Building fair financial infrastructure.".to_string(),
        },
        Peer {
            id: user_id!("u4"),
            name: "Sam Kim".to_string(),
            handle: "@samkim".to_string(),
            availability: Availability::Online,
            initials: "SK".to_string(),
            expertise: vec!["Product Management".to_string()],
            bio: "0 to 1 product person. Love hard problems.".to_string(),
        },
    ]
}

pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: room_id!("sr1"),
            name: "AI Ethics Roundtable".to_string(),
            description: "Debating the moral boundaries of artificial intelligence.".to_string(),
            visibility: RoomVisibility::Public,
            topic: Some("AI Research".to_string()),
            creator_id: None,
            creator_name: "Alex Chen".to_string(),
            member_limit: 50,
            member_count: 24,
            schedule: None,
            geo: Some(GeoAnchor {
                point: GeoPoint {
                    lat: 37.77,
                    lng: -122.42,
                },
                radius_miles: 99_999.0,
            }),
            pinned_conclusion: None,
        },
        Room {
            id: room_id!("sr2"),
            name: "Climate Action Now".to_string(),
            description: "Practical steps for climate tech adoption.".to_string(),
            visibility: RoomVisibility::Public,
            topic: Some("Climate Tech".to_string()),
            creator_id: None,
            creator_name: "Maya Patel".to_string(),
            member_limit: 50,
            member_count: 31,
            schedule: None,
            geo: Some(GeoAnchor {
                point: GeoPoint {
                    lat: 40.71,
                    lng: -74.01,
                },
                radius_miles: 100.0,
            }),
            pinned_conclusion: None,
        },
        Room {
            id: room_id!("sr4"),
            name: "DeFi Deep Dive".to_string(),
            description: "Exploring decentralized finance protocols.".to_string(),
            visibility: RoomVisibility::Public,
            topic: Some("Fintech".to_string()),
            creator_id: None,
            creator_name: "Sam Kim".to_string(),
            member_limit: 50,
            member_count: 42,
            schedule: None,
            geo: Some(GeoAnchor {
                point: GeoPoint {
                    lat: 34.05,
                    lng: -118.24,
                },
                radius_miles: 25.0,
            }),
            pinned_conclusion: None,
        },
    ]
}
