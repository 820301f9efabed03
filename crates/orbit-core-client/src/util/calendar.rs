// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{Duration, NaiveDateTime};
use url::Url;

use crate::domain::rooms::models::Room;

const EVENT_DURATION_HOURS: i64 = 2;

/// Renders the room's scheduled session as an iCalendar document. Returns
/// `None` for unscheduled rooms.
pub fn ics_export(room: &Room) -> Option<String> {
    let (start, end) = event_window(room)?;

    Some(format!(
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//OrbitThread//EN\nBEGIN:VEVENT\n\
         SUMMARY:{summary}\nDTSTART:{start}\nDTEND:{end}\nDESCRIPTION:{description}\n\
         END:VEVENT\nEND:VCALENDAR",
        summary = event_summary(room),
        start = format_timestamp(&start),
        end = format_timestamp(&end),
        description = room.description,
    ))
}

/// Prefilled Google Calendar event-edit URL for the room's scheduled
/// session.
pub fn google_calendar_url(room: &Room) -> Option<Url> {
    let (start, end) = event_window(room)?;

    Url::parse_with_params(
        "https://calendar.google.com/calendar/r/eventedit",
        &[
            ("text", event_summary(room)),
            (
                "dates",
                format!("{}/{}", format_timestamp(&start), format_timestamp(&end)),
            ),
            ("details", room.description.clone()),
        ],
    )
    .ok()
}

fn event_summary(room: &Room) -> String {
    format!("{} · Orbit Thread", room.name)
}

fn event_window(room: &Room) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let schedule = room.schedule.as_ref()?;
    let start = schedule.date.and_time(schedule.time);
    Some((start, start + Duration::hours(EVENT_DURATION_HOURS)))
}

fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
