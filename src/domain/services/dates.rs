use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Formats a feed date as `YYYY年MM月DD日`.
///
/// Feed dates are loosely formatted, so RFC 2822 (`pubDate`), RFC 3339 and a few
/// plain layouts are tried in turn. The calendar day is taken in the offset the
/// feed wrote, not converted to the host's zone. Anything unparseable, including
/// empty input, is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => format!("{}年{:02}月{:02}日", date.year(), date.month(), date.day()),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        })
}
