#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use horas::libs::interval::Interval;
    use horas::libs::ledger::{LedgerError, MonthLedger, RecordAction};
    use horas::libs::schedule::BreakSchedule;
    use horas::libs::workday::Workday;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    /// Lunch 12:00-13:00, dinner 18:00-18:30.
    fn schedule() -> BreakSchedule {
        BreakSchedule::new(
            Interval::new(t(12, 0), t(13, 0)).unwrap(),
            Interval::new(t(18, 0), t(18, 30)).unwrap(),
        )
    }

    /// Nine-to-six, which nets to eight hours under `schedule()`.
    fn standard_day() -> Interval {
        Interval::new(t(9, 0), t(18, 0)).unwrap()
    }

    #[test]
    fn test_record_first_day_appends() {
        let mut ledger = MonthLedger::new(schedule());

        let action = ledger.record_work(date(1), standard_day()).unwrap();
        assert_eq!(action, RecordAction::Appended);

        assert_eq!(ledger.total_worked(), Duration::hours(8));
        assert_eq!(ledger.total_days(), 1);
        assert_eq!(
            ledger.last(),
            Some(&Workday {
                date: date(1),
                interval: standard_day(),
                worked: Duration::hours(8),
            })
        );
    }

    #[test]
    fn test_record_new_dates_append_in_order() {
        let mut ledger = MonthLedger::new(schedule());

        ledger.record_work(date(1), standard_day()).unwrap();
        ledger.record_work(date(2), standard_day()).unwrap();
        ledger.record_work(date(4), standard_day()).unwrap();

        assert_eq!(ledger.total_worked(), Duration::hours(24));
        assert_eq!(ledger.total_days(), 3);

        let dates: Vec<NaiveDate> = ledger.days().iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(4)]);
    }

    #[test]
    fn test_record_same_date_replaces_last() {
        let mut ledger = MonthLedger::new(schedule());
        ledger.record_work(date(1), standard_day()).unwrap();

        // Correcting the start time reshapes the same entry
        let corrected = Interval::new(t(10, 0), t(18, 0)).unwrap();
        let action = ledger.record_work(date(1), corrected).unwrap();
        assert_eq!(action, RecordAction::Replaced);

        assert_eq!(ledger.days().len(), 1);
        assert_eq!(ledger.total_days(), 1);
        assert_eq!(ledger.total_worked(), Duration::hours(7));
        assert_eq!(ledger.last().unwrap().interval, corrected);
    }

    #[test]
    fn test_record_same_interval_is_idempotent() {
        let mut ledger = MonthLedger::new(schedule());
        ledger.record_work(date(1), standard_day()).unwrap();
        let before = ledger.clone();

        let action = ledger.record_work(date(1), standard_day()).unwrap();
        assert_eq!(action, RecordAction::Replaced);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_record_older_date_is_rejected() {
        let mut ledger = MonthLedger::new(schedule());
        ledger.record_work(date(2), standard_day()).unwrap();
        let before = ledger.clone();

        let err = ledger.record_work(date(1), standard_day()).unwrap_err();
        assert_eq!(
            err,
            LedgerError::DateOutOfOrder {
                date: date(1),
                last: date(2),
            }
        );

        // The failed call must not have touched any state
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_replace_only_affects_last_entry() {
        let mut ledger = MonthLedger::new(schedule());
        ledger.record_work(date(1), standard_day()).unwrap();
        ledger.record_work(date(2), standard_day()).unwrap();

        let half_day = Interval::new(t(9, 0), t(13, 0)).unwrap();
        ledger.record_work(date(2), half_day).unwrap();

        // Day one keeps its eight hours, day two shrinks to three
        assert_eq!(ledger.days()[0].worked, Duration::hours(8));
        assert_eq!(ledger.days()[1].worked, Duration::hours(3));
        assert_eq!(ledger.total_worked(), Duration::hours(11));
        assert_eq!(ledger.total_days(), 2);
    }

    #[test]
    fn test_summary_empty_ledger() {
        let summary = MonthLedger::new(schedule()).summary();
        assert_eq!(summary.total, Duration::zero());
        assert_eq!(summary.days, 0);
        assert_eq!(summary.average, Duration::zero());
    }

    #[test]
    fn test_summary_averages_over_days() {
        let mut ledger = MonthLedger::new(schedule());
        ledger.record_work(date(1), standard_day()).unwrap();
        ledger.record_work(date(2), Interval::new(t(10, 0), t(17, 0)).unwrap()).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.total, Duration::hours(14));
        assert_eq!(summary.days, 2);
        assert_eq!(summary.average, Duration::hours(7));
    }

    #[test]
    fn test_summary_average_truncates_to_seconds() {
        let mut ledger = MonthLedger::new(schedule());
        let with_second = Interval::new(t(9, 0), NaiveTime::from_hms_opt(17, 0, 1).unwrap()).unwrap();
        ledger.record_work(date(1), with_second).unwrap();
        ledger.record_work(date(2), Interval::new(t(9, 0), t(17, 0)).unwrap()).unwrap();

        // 50401 seconds over two days truncates, never rounds up
        let summary = ledger.summary();
        assert_eq!(summary.total, Duration::seconds(50401));
        assert_eq!(summary.average, Duration::seconds(25200));
    }

    #[test]
    fn test_from_parts_restores_state() {
        let days = vec![
            Workday {
                date: date(1),
                interval: standard_day(),
                worked: Duration::hours(8),
            },
            Workday {
                date: date(2),
                interval: standard_day(),
                worked: Duration::hours(8),
            },
        ];
        let mut ledger = MonthLedger::from_parts(schedule(), Duration::hours(16), 2, days);

        assert_eq!(ledger.total_worked(), Duration::hours(16));
        assert_eq!(ledger.total_days(), 2);
        assert_eq!(ledger.last().unwrap().date, date(2));

        // Recording picks up exactly where the restored state left off
        ledger.record_work(date(3), standard_day()).unwrap();
        assert_eq!(ledger.total_worked(), Duration::hours(24));
        assert_eq!(ledger.total_days(), 3);
    }
}
