#[cfg(test)]
mod tests {
    use chrono::Duration;
    use horas::libs::formatter::{format_duration, format_duration_hms, FormattedDay};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
    }

    #[test]
    fn test_format_duration_whole_hours() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        let duration = Duration::hours(2) + Duration::minutes(30);
        assert_eq!(format_duration(&duration), "02:30");
    }

    #[test]
    fn test_format_duration_does_not_wrap_at_24_hours() {
        // A monthly total keeps counting past a day
        let duration = Duration::hours(176) + Duration::minutes(30);
        assert_eq!(format_duration(&duration), "176:30");
    }

    #[test]
    fn test_format_duration_negative_clamps_to_zero() {
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
        assert_eq!(format_duration(&Duration::minutes(-90)), "00:00");
    }

    #[test]
    fn test_format_duration_truncates_seconds() {
        assert_eq!(format_duration(&Duration::seconds(59)), "00:00");
        assert_eq!(format_duration(&Duration::seconds(3661)), "01:01");
    }

    #[test]
    fn test_format_duration_hms_zero() {
        assert_eq!(format_duration_hms(&Duration::zero()), "00:00:00");
    }

    #[test]
    fn test_format_duration_hms_full() {
        let duration = Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4);
        assert_eq!(format_duration_hms(&duration), "02:03:04");
    }

    #[test]
    fn test_format_duration_hms_does_not_wrap() {
        let duration = Duration::hours(100) + Duration::seconds(5);
        assert_eq!(format_duration_hms(&duration), "100:00:05");
    }

    #[test]
    fn test_format_duration_hms_negative_clamps_to_zero() {
        assert_eq!(format_duration_hms(&Duration::seconds(-30)), "00:00:00");
    }

    #[test]
    fn test_formatted_day_serialization() {
        let day = FormattedDay {
            date: "2025-09-01".to_string(),
            start: "09:00:00".to_string(),
            end: "18:00:00".to_string(),
            worked: "08:00:00".to_string(),
        };

        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"date\":\"2025-09-01\""));
        assert!(json.contains("\"worked\":\"08:00:00\""));

        let back: FormattedDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, day.date);
        assert_eq!(back.start, day.start);
        assert_eq!(back.end, day.end);
        assert_eq!(back.worked, day.worked);
    }
}
