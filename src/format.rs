//! Display Formatting
//!
//! pl-PL style dates and hour counts for the views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `2024-03-15T10:30:00` -> `15.03.2024`; unparseable input is returned as-is
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `2024-03-15T10:30:00` -> `15.03.2024, 10:30:00`
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d.%m.%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Hours with at most one decimal place: `12h`, `7.5h`
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    format!("{}h", rounded)
}

/// Timestamps keep their own wall-clock time; offsets are not converted.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T10:30:00"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T10:30:00.123456"), "15.03.2024");
        assert_eq!(format_date("2024-03-15 23:59:59"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T22:00:00Z"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T01:00:00+02:00"), "15.03.2024");
    }

    #[test]
    fn test_format_date_falls_back_to_raw() {
        assert_eq!(format_date("jutro"), "jutro");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-06-01T09:05:07"), "01.06.2024, 09:05:07");
        assert_eq!(format_timestamp("2024-06-01"), "01.06.2024, 00:00:00");
        assert_eq!(format_timestamp("n/a"), "n/a");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(12.0), "12h");
        assert_eq!(format_hours(7.5), "7.5h");
        assert_eq!(format_hours(0.1 + 0.2), "0.3h");
        assert_eq!(format_hours(0.0), "0h");
    }
}
