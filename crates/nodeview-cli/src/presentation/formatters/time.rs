use chrono::{DateTime, Utc};

/// Timestamps are shown in UTC so output does not depend on the operator's
/// local zone.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn format_optional(ts: Option<DateTime<Utc>>) -> String {
    ts.map(format_timestamp).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 5).unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-01 12:00:05 UTC");
        assert_eq!(format_optional(None), "");
    }
}
