// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use uuid::Uuid;

use crate::domain::general::services::IdProvider;

/// UUIDv4 ids for long-lived records (accounts, rooms).
#[derive(Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Short nanoid-style ids for high-volume records (messages, uploads).
#[derive(Default)]
pub struct NanoIdProvider;

impl IdProvider for NanoIdProvider {
    fn new_id(&self) -> String {
        nanoid::nanoid!()
    }
}
