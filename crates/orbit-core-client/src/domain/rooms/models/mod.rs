// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room::{
    radius_label, DiscoverFilter, GeoAnchor, GeoPoint, MemberLimit, MemberRole, Room, RoomDraft,
    RoomError, RoomVisibility, Schedule, MAX_MEMBER_LIMIT, WORLDWIDE_RADIUS_MILES,
};

mod room;
