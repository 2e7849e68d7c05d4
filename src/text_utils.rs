use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%B %d, %Y";

fn parse_date(buf: &str) -> Option<NaiveDate> {
    let buf = buf.trim();

    if let Ok(date) = NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        return Some(date);
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(buf, fmt) {
            return Some(date_time.date());
        }
    }

    DateTime::parse_from_rfc3339(buf).ok().map(|d| d.date_naive())
}

/// Formats a post date like "March 10, 2024". Dates that cannot be parsed are
/// returned untouched.
pub fn display_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format(DISPLAY_FORMAT).to_string(),
        None => date.to_string(),
    }
}

/// Rejects anything that could escape the directory it is joined to.
pub fn is_safe_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains("..")
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.contains('\0')
}
