use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use meethub_core::MeetHubError;
use meethub_core::models::{
    ActionItemKind, ActionItemStatus, KNOWN_CATEGORIES, MeetingStatus, SourceType,
};

pub(super) fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{raw}' (expected YYYY-MM-DD)"))
}

pub(super) fn parse_time(raw: &str) -> std::result::Result<NaiveTime, String> {
    let raw_trimmed = raw.trim();
    NaiveTime::parse_from_str(raw_trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw_trimmed, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{raw}' (expected HH:MM)"))
}

pub(super) fn parse_category(raw: &str) -> std::result::Result<String, String> {
    KNOWN_CATEGORIES
        .iter()
        .find(|category| category.eq_ignore_ascii_case(raw.trim()))
        .map(|category| (*category).to_string())
        .ok_or_else(|| {
            format!(
                "unknown category '{raw}' (expected one of: {})",
                KNOWN_CATEGORIES.join(", ")
            )
        })
}

pub(super) fn parse_meeting_status(raw: &str) -> std::result::Result<MeetingStatus, String> {
    parse_label(raw)
}

pub(super) fn parse_item_kind(raw: &str) -> std::result::Result<ActionItemKind, String> {
    parse_label(raw)
}

pub(super) fn parse_item_status(raw: &str) -> std::result::Result<ActionItemStatus, String> {
    parse_label(raw)
}

pub(super) fn parse_source_type(raw: &str) -> std::result::Result<SourceType, String> {
    parse_label(raw)
}

fn parse_label<T: FromStr<Err = MeetHubError>>(raw: &str) -> std::result::Result<T, String> {
    raw.parse().map_err(|err: MeetHubError| err.to_string())
}
