use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::aggregate_by_month;
use crate::core::calculator::period::{day_total, has_open_period, period_minutes};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::Summary;
use crate::models::state::TrackerState;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_delta, colorize_open, colorize_optional};
use crate::utils::date::{
    month_dates, parse_date_or_today, parse_month, parse_range, today, week_dates,
    week_start, weekday_short,
};
use crate::utils::formatting::{bold, pad_right, separator};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

/// What the user asked to see.
enum View {
    Day,
    Week,
    Month,
    Range,
    All,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        now,
        week,
        month,
        range,
        all,
    } = cmd
    {
        let (_pool, state) = Core::open(cfg)?;

        let (view, title, records) = if *now {
            let d = today();
            (View::Day, format!("Today {d}"), Core::records_for(&state, &[d]))
        } else if let Some(m) = month {
            let first = if m.is_empty() { today() } else { parse_month(m)? };
            let dates = month_dates(first);
            let records = match (dates.first(), dates.last()) {
                (Some(a), Some(b)) => state.records_between(*a, *b),
                _ => Vec::new(),
            };
            (View::Month, format!("Month {}", first.format("%Y-%m")), records)
        } else if let Some((start, end)) = range.as_deref().map(parse_range).transpose()? {
            let records = state.records_between(start, end);
            (View::Range, format!("From {start} to {end}"), records)
        } else if *all {
            (View::All, "All records".to_string(), state.all_records())
        } else {
            // default: a week, always 7 days including the empty ones
            let raw = week.as_ref().filter(|w| !w.is_empty());
            let d = parse_date_or_today(raw)?;
            let dates = week_dates(d);
            (
                View::Week,
                format!("Week of {}", week_start(d)),
                Core::records_for(&state, &dates),
            )
        };

        header(&title);

        if records.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let sep = separator(&cfg.separator_char, 48);
        for r in &records {
            print_day(r, matches!(view, View::Week | View::Day));
            println!("{sep}");
        }

        if matches!(view, View::All | View::Range) {
            print_months(&records, state.daily_target_minutes);
        }

        print_summary(&Core::summarize(&state, &records), &state);
    }
    Ok(())
}

fn print_day(record: &DayRecord, show_empty: bool) {
    let total = day_total(record);
    let open = if has_open_period(record) {
        format!("  {}", colorize_open("(clocked in)"))
    } else {
        String::new()
    };

    println!(
        "{} {}  {}{}",
        bold(&record.date_str()),
        weekday_short(record.date),
        colorize_optional(&format_minutes(total)),
        open
    );

    if record.periods.is_empty() {
        if show_empty {
            println!("  {}", colorize_optional("--:--"));
        }
    } else {
        let mut table = Table::new(vec![
            Column::new("  #", 4),
            Column::new("Start", 6),
            Column::new("End", 6),
            Column::new("Duration", 8),
        ]);

        for (i, p) in record.periods.iter().enumerate() {
            let end = if p.is_open() {
                colorize_open(p.end_str())
            } else {
                colorize_optional(p.end_str())
            };
            table.add_row(vec![
                format!("  {}", i + 1),
                colorize_optional(p.start_str()),
                end,
                format_minutes(period_minutes(p)),
            ]);
        }
        print!("{}", table.render());
    }

    if let Some(note) = &record.note {
        println!("  📝 {note}");
    }
}

fn print_months(records: &[DayRecord], daily_target: i64) {
    let months = aggregate_by_month(records, daily_target);
    if months.len() < 2 {
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Month", 8),
        Column::new("Days", 5),
        Column::new("Worked", 9),
        Column::new("Target", 9),
        Column::new("Delta", 9),
    ]);

    for (key, s) in months {
        table.add_row(vec![
            key,
            s.worked_days.to_string(),
            format_minutes(s.total),
            format_minutes(s.target),
            format!(
                "{}{}{RESET}",
                color_for_delta(s.delta),
                mins2readable(s.delta, true, true)
            ),
        ]);
    }

    print!("{}", table.render());
}

fn print_summary(summary: &Summary, state: &TrackerState) {
    println!(
        "{} {}  ({} days × {})",
        pad_right("Worked:", 8),
        format_minutes(summary.total),
        summary.worked_days,
        format_minutes(state.daily_target_minutes)
    );
    println!("{} {}", pad_right("Target:", 8), format_minutes(summary.target));
    println!(
        "{} {}{}{RESET}",
        pad_right("Delta:", 8),
        color_for_delta(summary.delta),
        mins2readable(summary.delta, true, true)
    );
}
