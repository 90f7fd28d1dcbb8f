//! Shared formatting utilities for the UI layer.

use std::fmt::Display;

use chrono::{Local, Locale, TimeZone};
use shared_types::CaseEvent;

/// Locale the portal is written in. Date and time layout follow it.
pub const UI_LOCALE: Locale = Locale::es_ES;

/// Locale date, then locale time.
pub const EVENT_TIMESTAMP_FORMAT: &str = "%x, %X";

/// Format an event timestamp for the history timeline in the viewer's
/// own time zone.
///
/// Falls back to the raw value when it cannot be parsed.
pub fn format_event_timestamp(event: &CaseEvent) -> String {
    format_event_timestamp_in(event, &Local)
}

/// [`format_event_timestamp`] against an explicit zone.
pub fn format_event_timestamp_in<Tz>(event: &CaseEvent, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match event.timestamp() {
        Some(at) => at
            .in_zone(tz)
            .format_localized(EVENT_TIMESTAMP_FORMAT, UI_LOCALE)
            .to_string(),
        None => event.occurred_at.clone(),
    }
}
