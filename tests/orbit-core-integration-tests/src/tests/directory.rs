// orbit-core-client/orbit-core-integration-tests
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use orbit_core_client::dtos::{Availability, ConnectionState};
use orbit_core_client::user_id;

use super::helpers::TestClient;

#[tokio::test]
async fn test_contacts_carry_connection_state() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    client.connections.send_request(&user_id!("u2")).await?;

    let contacts = client.directory.load_contacts().await?;
    assert_eq!(contacts.len(), 4);

    let maya = contacts.iter().find(|c| c.id == user_id!("u2")).unwrap();
    assert_eq!(maya.name, "Maya Patel");
    assert_eq!(maya.availability, Availability::Away);
    assert_eq!(maya.connection_state, ConnectionState::PendingSent);

    let alex = contacts.iter().find(|c| c.id == user_id!("u1")).unwrap();
    assert_eq!(alex.connection_state, ConnectionState::None);
    Ok(())
}

#[tokio::test]
async fn test_search_by_name_and_handle() -> Result<()> {
    let (client, _) = TestClient::signed_in().await?;

    let results = client.directory.search("maya").await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].handle, "@mayapatel");

    let results = client.directory.search("@samkim").await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Sam Kim");

    assert!(client.directory.search("zebra").await?.is_empty());
    Ok(())
}
