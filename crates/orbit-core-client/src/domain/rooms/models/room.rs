// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{RoomId, UserId};

/// Sentinel radius that switches a public room's discovery to worldwide.
pub const WORLDWIDE_RADIUS_MILES: f64 = 99_999.0;

/// Custom member limits are clamped to this ceiling.
pub const MAX_MEMBER_LIMIT: u32 = 1_000;

const DEFAULT_MEMBER_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RoomVisibility {
    Public,
    Private,
}

/// Scheduled session attached to a room, interpreted as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Discovery anchor for public rooms: where the room lives and how far out
/// it should be visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoAnchor {
    pub point: GeoPoint,
    pub radius_miles: f64,
}

impl GeoAnchor {
    pub fn is_worldwide(&self) -> bool {
        self.radius_miles >= WORLDWIDE_RADIUS_MILES
    }

    pub fn radius_label(&self) -> &'static str {
        radius_label(self.radius_miles)
    }
}

pub fn radius_label(radius_miles: f64) -> &'static str {
    match radius_miles as u32 {
        1 => "1 mile",
        5 => "5 miles",
        25 => "25 miles",
        100 => "100 miles",
        50 => "My City",
        3_000 => "My Country",
        _ => "Worldwide",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberLimit {
    Preset(u32),
    Custom(u32),
}

impl MemberLimit {
    /// Custom limits are clamped to `MAX_MEMBER_LIMIT`; a zero custom limit
    /// falls back to the default of 50.
    pub fn effective(&self) -> u32 {
        match self {
            Self::Preset(limit) => *limit,
            Self::Custom(0) => DEFAULT_MEMBER_LIMIT,
            Self::Custom(limit) => (*limit).min(MAX_MEMBER_LIMIT),
        }
    }
}

impl Default for MemberLimit {
    fn default() -> Self {
        Self::Preset(DEFAULT_MEMBER_LIMIT)
    }
}

/// A discussion room ("Circle").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub visibility: RoomVisibility,
    pub topic: Option<String>,
    pub creator_id: Option<UserId>,
    pub creator_name: String,
    pub member_limit: u32,
    pub member_count: u32,
    pub schedule: Option<Schedule>,
    pub geo: Option<GeoAnchor>,
    pub pinned_conclusion: Option<String>,
}

/// Input for creating a room. Validation happens in the domain service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomDraft {
    pub name: String,
    pub purpose: String,
    pub visibility: Option<RoomVisibility>,
    pub topic: Option<String>,
    pub member_limit: MemberLimit,
    pub schedule: Option<Schedule>,
    pub geo: Option<GeoAnchor>,
}

/// Filter for the public-room discovery listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoverFilter {
    /// `None` matches every topic.
    pub topic: Option<String>,
    /// When set, rooms with a geo anchor are only included if the caller is
    /// within the room's radius.
    pub origin: Option<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Owner,
    Member,
}

/// Validation and quota errors raised before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    #[error("a room needs a name")]
    EmptyName,
    #[error("daily limit of {limit} rooms reached")]
    DailyLimitReached { limit: usize },
    #[error("room not found")]
    NotFound,
    #[error("a pinned conclusion cannot be empty")]
    EmptyConclusion,
}
