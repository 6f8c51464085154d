use jiff::{
    Timestamp, Zoned,
    civil::{Date, DateTime},
    tz,
};

/// Helper function to localize a timestamp to the given timezone, or the
/// user's own when none is given or it is unknown.
pub fn localize_timestamp(timestamp: Timestamp, timezone: Option<&str>) -> Zoned {
    match timezone {
        Some(tz_name) => match timestamp.in_tz(tz_name) {
            Ok(zoned) => zoned,
            Err(_) => timestamp.to_zoned(tz::TimeZone::system()),
        },
        None => timestamp.to_zoned(tz::TimeZone::system()),
    }
}

/// Short numeric date the way browsers show `toLocaleDateString()` for
/// en-US: month/day/year without padding.
pub fn format_short_date(date: Date) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Format an event's `date` field for display.
///
/// Instants are shown as the calendar day in the user's timezone. Plain
/// calendar dates are shown as-is, without shifting through UTC. Anything
/// else is shown verbatim.
pub fn format_event_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return format_short_date(localize_timestamp(timestamp, None).date());
    }
    if let Ok(datetime) = raw.parse::<DateTime>() {
        return format_short_date(datetime.date());
    }
    if let Ok(date) = raw.parse::<Date>() {
        return format_short_date(date);
    }
    raw.to_string()
}
