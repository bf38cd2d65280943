#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use horas::libs::export::{ExportFormat, Exporter};
    use horas::libs::interval::Interval;
    use horas::libs::ledger::MonthLedger;
    use horas::libs::schedule::BreakSchedule;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// September 2025 with two recorded days: 8h00 and 6h30 net,
    /// so the month totals 14:30 and averages 07:15.
    fn september() -> (NaiveDate, MonthLedger) {
        let month = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let breaks = BreakSchedule::new(
            Interval::new(t(12, 0), t(13, 0)).unwrap(),
            Interval::new(t(18, 0), t(18, 30)).unwrap(),
        );
        let mut ledger = MonthLedger::new(breaks);
        ledger
            .record_work(month, Interval::new(t(9, 0), t(18, 0)).unwrap())
            .unwrap();
        ledger
            .record_work(
                NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
                Interval::new(t(10, 0), t(17, 30)).unwrap(),
            )
            .unwrap();
        (month, ledger)
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let (month, ledger) = september();

        let output_path = ctx.temp_dir.path().join("test_export.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()), month);
        exporter.export(month, &ledger).unwrap();

        // Verify file exists
        assert!(output_path.exists());

        // Read and verify content
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("Working hours for September 2025"));
        assert!(content.contains("Date,Start,End,Worked"));
        assert!(content.contains("2025-09-01,09:00:00,18:00:00,08:00:00"));
        assert!(content.contains("2025-09-02,10:00:00,17:30:00,06:30:00"));
        assert!(content.contains("Total Hours,14:30"));
        assert!(content.contains("Average Hours,07:15"));
        assert!(content.contains("Total Days,2"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let (month, ledger) = september();

        let output_path = ctx.temp_dir.path().join("test_export.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()), month);
        exporter.export(month, &ledger).unwrap();

        // Verify file exists and is valid JSON
        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["month"], "September 2025");
        assert_eq!(value["total_hours"], "14:30");
        assert_eq!(value["average_hours"], "07:15");
        assert_eq!(value["total_days"], 2);

        let days = value["days"].as_array().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0]["date"], "2025-09-01");
        assert_eq!(days[1]["worked"], "06:30:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let (month, ledger) = september();

        let output_path = ctx.temp_dir.path().join("test_export.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()), month);
        exporter.export(month, &ledger).unwrap();

        // Verify file exists and has content
        assert!(output_path.exists());
        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }
}
