use chrono::{Datelike, NaiveDate, Weekday};
use worklog::core::calculator::aggregate::{aggregate, aggregate_by_month};
use worklog::core::calculator::period::{day_total, has_open_period, period_minutes};
use worklog::core::entry::EntryLogic;
use worklog::errors::AppError;
use worklog::export::import::parse_document;
use worklog::export::{records_to_rows, render_csv, render_json};
use worklog::models::day_record::DayRecord;
use worklog::models::period::TimePeriod;
use worklog::models::state::TrackerState;
use worklog::utils::date::{month_key, parse_range, week_dates, week_start};
use worklog::utils::time::{format_minutes, parse_duration, parse_minutes};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn p(start: Option<&str>, end: Option<&str>) -> TimePeriod {
    TimePeriod::new(start.map(String::from), end.map(String::from))
}

fn day(date: &str, periods: Vec<TimePeriod>) -> DayRecord {
    DayRecord {
        date: d(date),
        periods,
        note: None,
    }
}

// ---------------------------
// Time arithmetic
// ---------------------------

#[test]
fn test_parse_format_round_trip_whole_day() {
    for h in 0..24 {
        for m in 0..60 {
            let s = format!("{h:02}:{m:02}");
            let mins = parse_minutes(&s);
            assert_eq!(mins, h * 60 + m);
            assert_eq!(format_minutes(mins), s);
        }
    }
}

#[test]
fn test_format_negative_uses_absolute_digits() {
    assert_eq!(format_minutes(-65), "-01:05");
    assert_eq!(format_minutes(-510), "-08:30");
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(2400), "40:00");
}

#[test]
fn test_parse_minutes_malformed_is_zero() {
    for bad in ["", "   ", "8", "ab:cd", "24:00", "12:60", "1:2:3", "-1:00", "123:00"] {
        assert_eq!(parse_minutes(bad), 0, "input {bad:?}");
    }
    assert_eq!(parse_minutes("8:05"), 485);
}

#[test]
fn test_parse_duration_forms() {
    assert_eq!(parse_duration("8h").unwrap(), 480);
    assert_eq!(parse_duration("7h30m").unwrap(), 450);
    assert_eq!(parse_duration("45m").unwrap(), 45);
    assert_eq!(parse_duration("07:30").unwrap(), 450);
    assert_eq!(parse_duration("450").unwrap(), 450);

    assert!(matches!(parse_duration("-5"), Err(AppError::InvalidDuration(_))));
    assert!(matches!(parse_duration("8x"), Err(AppError::InvalidDuration(_))));
    assert!(matches!(parse_duration("h"), Err(AppError::InvalidDuration(_))));
    assert!(matches!(parse_duration(""), Err(AppError::InvalidDuration(_))));

    // too large for i64 minutes
    assert!(matches!(
        parse_duration("999999999999999999h"),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        parse_duration("999999999999999999:00"),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        parse_duration("9223372036854775807m1m"),
        Err(AppError::InvalidDuration(_))
    ));
}

// ---------------------------
// Period calculator
// ---------------------------

#[test]
fn test_period_minutes() {
    assert_eq!(period_minutes(&p(Some("08:00"), Some("16:30"))), 510);
    assert_eq!(period_minutes(&p(Some("22:00"), Some("06:00"))), 480);
    assert_eq!(period_minutes(&p(Some("08:00"), None)), 0);
    assert_eq!(period_minutes(&p(None, Some("12:00"))), 0);
    assert_eq!(period_minutes(&p(Some("08:00"), Some(""))), 0);
    assert_eq!(period_minutes(&p(Some("09:00"), Some("09:00"))), 0);
}

#[test]
fn test_day_total_is_order_independent() {
    let a = p(Some("08:00"), Some("12:00"));
    let b = p(Some("13:00"), Some("17:15"));
    let c = p(Some("18:00"), None);

    let forward = day("2025-09-01", vec![a.clone(), b.clone(), c.clone()]);
    let backward = day("2025-09-01", vec![c, b, a]);

    assert_eq!(day_total(&forward), 495);
    assert_eq!(day_total(&forward), day_total(&backward));
}

#[test]
fn test_open_period_only_looks_at_last() {
    assert!(!has_open_period(&day("2025-09-01", vec![])));
    assert!(has_open_period(&day("2025-09-01", vec![p(Some("08:00"), None)])));
    assert!(!has_open_period(&day(
        "2025-09-01",
        vec![p(Some("08:00"), None), p(Some("13:00"), Some("14:00"))]
    )));
}

// ---------------------------
// Calendar grouping
// ---------------------------

#[test]
fn test_week_start_is_monday_and_window_contains_date() {
    let mut date = d("2024-12-20");
    for _ in 0..40 {
        let start = week_start(date);
        assert_eq!(start.weekday(), Weekday::Mon);

        let window = week_dates(date);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0], start);
        assert_eq!(window.iter().filter(|x| **x == date).count(), 1);

        date = date.succ_opt().unwrap();
    }
}

#[test]
fn test_week_start_across_year_boundary() {
    // Wednesday 2025-01-01 belongs to the week starting Monday 2024-12-30
    assert_eq!(week_start(d("2025-01-01")), d("2024-12-30"));
    assert_eq!(week_start(d("2024-12-30")), d("2024-12-30"));
}

#[test]
fn test_month_key() {
    assert_eq!(month_key(d("2025-09-15")), "2025-09");
    assert_eq!(month_key(d("2024-01-01")), "2024-01");
}

#[test]
fn test_parse_range() {
    assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(
        parse_range("2025-09-01:2025-09-10").unwrap(),
        (d("2025-09-01"), d("2025-09-10"))
    );
    assert!(parse_range("2025-09:2025").is_err());
    assert!(parse_range("2025-10:2025-09").is_err());
    assert!(parse_range("yesterday").is_err());
}

// ---------------------------
// Aggregation
// ---------------------------

#[test]
fn test_aggregate_empty() {
    let s = aggregate(&[], 480);
    assert_eq!((s.total, s.target, s.delta, s.worked_days), (0, 0, 0, 0));
}

#[test]
fn test_aggregate_saturates_on_huge_target() {
    let records = vec![
        day("2025-09-01", vec![p(Some("08:00"), Some("16:00"))]),
        day("2025-09-02", vec![p(Some("08:00"), Some("16:00"))]),
    ];
    let s = aggregate(&records, i64::MAX);
    assert_eq!(s.total, 960);
    assert_eq!(s.target, i64::MAX);
    assert_eq!(s.delta, 960 - i64::MAX);
}

#[test]
fn test_aggregate_full_week() {
    let records: Vec<DayRecord> = week_dates(d("2025-09-03"))
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let periods = if i < 5 {
                vec![p(Some("08:00"), Some("16:00"))]
            } else {
                vec![]
            };
            DayRecord {
                date,
                periods,
                note: None,
            }
        })
        .collect();

    let s = aggregate(&records, 480);
    assert_eq!(s.total, 2400);
    assert_eq!(s.target, 2400);
    assert_eq!(s.delta, 0);
    assert_eq!(s.worked_days, 5);
}

#[test]
fn test_aggregate_open_only_day_does_not_count() {
    let records = vec![
        day("2025-09-01", vec![p(Some("08:00"), Some("17:00"))]),
        day("2025-09-02", vec![p(Some("08:00"), None)]),
    ];
    let s = aggregate(&records, 480);
    assert_eq!(s.total, 540);
    assert_eq!(s.target, 480);
    assert_eq!(s.delta, 60);
}

#[test]
fn test_aggregate_by_month_buckets() {
    let records = vec![
        day("2025-08-29", vec![p(Some("08:00"), Some("15:00"))]),
        day("2025-09-01", vec![p(Some("08:00"), Some("16:00"))]),
        day("2025-09-02", vec![p(Some("08:00"), Some("17:00"))]),
    ];
    let months = aggregate_by_month(&records, 480);
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].0, "2025-08");
    assert_eq!(months[0].1.delta, -60);
    assert_eq!(months[1].0, "2025-09");
    assert_eq!(months[1].1.total, 1020);
    assert_eq!(months[1].1.delta, 60);
}

// ---------------------------
// Mutations
// ---------------------------

#[test]
fn test_clock_in_out_gating() {
    let mut state = TrackerState::default();
    let date = d("2025-09-01");

    assert!(matches!(
        EntryLogic::clock_out(&mut state, date, "09:00"),
        Err(AppError::NotClockedIn(_))
    ));

    EntryLogic::clock_in(&mut state, date, "08:00").unwrap();
    assert!(matches!(
        EntryLogic::clock_in(&mut state, date, "08:05"),
        Err(AppError::AlreadyClockedIn(_))
    ));

    EntryLogic::clock_out(&mut state, date, "12:00").unwrap();
    EntryLogic::clock_in(&mut state, date, "13:00").unwrap();

    let record = state.record(date).unwrap();
    assert_eq!(record.periods.len(), 2);
    assert!(has_open_period(record));
    assert_eq!(day_total(record), 240);
}

#[test]
fn test_clock_in_blocked_by_running_night_shift() {
    let mut state = TrackerState::default();

    EntryLogic::clock_in(&mut state, d("2025-09-01"), "22:00").unwrap();
    assert!(matches!(
        EntryLogic::clock_in(&mut state, d("2025-09-02"), "08:00"),
        Err(AppError::AlreadyClockedIn(open_day)) if open_day == "2025-09-01"
    ));

    // a shift left open two days ago does not block
    EntryLogic::clock_in(&mut state, d("2025-09-03"), "08:00").unwrap();

    EntryLogic::clock_out(&mut state, d("2025-09-01"), "06:00").unwrap();
    EntryLogic::clock_in(&mut state, d("2025-09-02"), "08:00").unwrap();
    assert_eq!(day_total(state.record(d("2025-09-01")).unwrap()), 480);
}

#[test]
fn test_set_target_bounds() {
    let mut state = TrackerState::default();
    EntryLogic::set_target(&mut state, 1440).unwrap();
    assert_eq!(state.daily_target_minutes, 1440);

    assert!(matches!(
        EntryLogic::set_target(&mut state, 1441),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        EntryLogic::set_target(&mut state, -1),
        Err(AppError::InvalidDuration(_))
    ));
    assert_eq!(state.daily_target_minutes, 1440);
}

#[test]
fn test_empty_period_is_refused() {
    let mut state = TrackerState::default();
    let date = d("2025-09-01");

    assert!(matches!(
        EntryLogic::add_period(&mut state, date, None, None),
        Err(AppError::EmptyPeriod)
    ));
    assert!(state.record(date).is_none());

    EntryLogic::add_period(&mut state, date, None, Some("12:00".into())).unwrap();
    assert!(matches!(
        EntryLogic::edit_period(&mut state, date, 1, None, None, true),
        Err(AppError::EmptyPeriod)
    ));
    // rejected edit leaves the period untouched
    assert_eq!(state.record(date).unwrap().periods[0], p(None, Some("12:00")));
}

#[test]
fn test_edit_and_delete_period() {
    let mut state = TrackerState::default();
    let date = d("2025-09-01");

    EntryLogic::add_period(&mut state, date, Some("08:00".into()), Some("12:00".into())).unwrap();
    EntryLogic::edit_period(&mut state, date, 1, None, Some("12:30".into()), false).unwrap();
    assert_eq!(day_total(state.record(date).unwrap()), 270);

    assert!(matches!(
        EntryLogic::edit_period(&mut state, date, 2, Some("13:00".into()), None, false),
        Err(AppError::InvalidPeriod(2))
    ));

    let removed = EntryLogic::delete_period(&mut state, date, 1).unwrap();
    assert_eq!(removed, p(Some("08:00"), Some("12:30")));

    // the record itself stays
    assert!(state.record(date).unwrap().periods.is_empty());
    assert!(matches!(
        EntryLogic::delete_period(&mut state, date, 1),
        Err(AppError::NoPeriodsForDate(_))
    ));
}

#[test]
fn test_note_set_and_clear() {
    let mut state = TrackerState::default();
    let date = d("2025-09-01");

    EntryLogic::set_note(&mut state, date, Some("doctor".into()));
    assert_eq!(state.record(date).unwrap().note.as_deref(), Some("doctor"));

    EntryLogic::set_note(&mut state, date, Some("  ".into()));
    assert_eq!(state.record(date).unwrap().note, None);
}

// ---------------------------
// Serialization
// ---------------------------

#[test]
fn test_json_round_trip() {
    let mut state = TrackerState::with_target(450);
    EntryLogic::add_period(&mut state, d("2025-09-01"), Some("08:00".into()), Some("16:30".into())).unwrap();
    EntryLogic::clock_in(&mut state, d("2025-09-02"), "22:00").unwrap();
    EntryLogic::set_note(&mut state, d("2025-09-03"), Some("holiday; \"bridge\"".into()));

    let json = render_json(&state).unwrap();
    assert!(json.contains("\"entries\""));
    assert!(json.contains("\"dailyTargetMinutes\": 450"));

    let back = parse_document(&json, &TrackerState::default()).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_import_without_entries_is_rejected() {
    let current = TrackerState::with_target(480);
    let err = parse_document(r#"{"dailyTargetMinutes": 300}"#, &current).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));

    let err = parse_document(r#"{"entries": {}, "dailyTargetMinutes": 300}"#, &current).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));

    let err = parse_document("not json", &current).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));

    let err = parse_document(r#"{"entries": [{"date": "2025-13-01"}]}"#, &current).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
}

#[test]
fn test_import_keeps_target_when_not_numeric() {
    let current = TrackerState::with_target(420);
    let doc = r#"{
        "entries": [
            {"date": "2025-09-01", "periods": [{"start": "08:00", "end": "12:00"}]},
            {"date": "2025-09-02"}
        ],
        "dailyTargetMinutes": "lots"
    }"#;

    let state = parse_document(doc, &current).unwrap();
    assert_eq!(state.daily_target_minutes, 420);
    assert_eq!(state.records.len(), 2);
    assert!(state.record(d("2025-09-02")).unwrap().periods.is_empty());
}

#[test]
fn test_import_keeps_target_when_out_of_range() {
    let current = TrackerState::with_target(420);
    let doc = r#"{
        "entries": [
            {"date": "2025-09-01", "periods": [{"start": "08:00", "end": "16:00"}]},
            {"date": "2025-09-02", "periods": [{"start": "08:00", "end": "16:00"}]}
        ],
        "dailyTargetMinutes": 1e300
    }"#;

    let state = parse_document(doc, &current).unwrap();
    assert_eq!(state.daily_target_minutes, 420);

    let s = aggregate(&state.all_records(), state.daily_target_minutes);
    assert_eq!(s.delta, 960 - 840);

    let negative = parse_document(r#"{"entries": [], "dailyTargetMinutes": -30}"#, &current).unwrap();
    assert_eq!(negative.daily_target_minutes, 420);

    let rounded = parse_document(r#"{"entries": [], "dailyTargetMinutes": 450.4}"#, &current).unwrap();
    assert_eq!(rounded.daily_target_minutes, 450);
}

#[test]
fn test_import_duplicate_dates_last_wins() {
    let doc = r#"{
        "entries": [
            {"date": "2025-09-01", "periods": [{"start": "08:00", "end": "09:00"}]},
            {"date": "2025-09-01", "periods": [{"start": "10:00", "end": "12:00"}]}
        ],
        "dailyTargetMinutes": 480
    }"#;

    let state = parse_document(doc, &TrackerState::default()).unwrap();
    assert_eq!(state.records.len(), 1);
    assert_eq!(day_total(state.record(d("2025-09-01")).unwrap()), 120);
}

#[test]
fn test_csv_rows_and_placeholder() {
    let records = vec![
        day(
            "2025-09-01",
            vec![p(Some("08:00"), Some("16:30")), p(Some("22:00"), Some("06:00"))],
        ),
        day("2025-09-02", vec![]),
        day("2025-09-03", vec![p(Some("08:00"), None)]),
    ];

    let mut out = Vec::new();
    render_csv(&records_to_rows(&records), &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Datum;Start;Ende;Dauer [min];Dauer [hh:mm]");
    assert_eq!(lines[1], "2025-09-01;08:00;16:30;510;08:30");
    assert_eq!(lines[2], "2025-09-01;22:00;06:00;480;08:00");
    assert_eq!(lines[3], "2025-09-02;;;0;00:00");
    assert_eq!(lines[4], "2025-09-03;08:00;;0;00:00");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_csv_quotes_embedded_delimiter() {
    let records = vec![day("2025-09-01", vec![p(Some("08;00"), Some("09:00"))])];

    let mut out = Vec::new();
    render_csv(&records_to_rows(&records), &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();

    assert!(csv.contains("2025-09-01;\"08;00\";09:00;"));
}
