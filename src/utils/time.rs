//! Time utilities: parsing HH:MM, formatting minutes, parsing target durations.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes since midnight for a `"HH:MM"` string.
///
/// Empty or malformed input yields 0 so that stored data with a broken
/// field still renders as a zero-length period.
pub fn parse_minutes(s: &str) -> i64 {
    let Some((h, m)) = s.trim().split_once(':') else {
        return 0;
    };

    let is_num = |p: &str| !p.is_empty() && p.len() <= 2 && p.bytes().all(|b| b.is_ascii_digit());
    if !is_num(h) || !is_num(m) {
        return 0;
    }

    match (h.parse::<i64>(), m.parse::<i64>()) {
        (Ok(h), Ok(m)) if h < 24 && m < 60 => h * 60 + m,
        _ => 0,
    }
}

/// Signed `HH:MM` rendering, e.g. `-65` → `"-01:05"`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Strict validation of user-supplied clock times.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Normalizes an optional CLI time argument to the stored `HH:MM` form.
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    match input {
        Some(s) => Ok(Some(parse_time(s)?.format("%H:%M").to_string())),
        None => Ok(None),
    }
}

/// Current local wall-clock time as `HH:MM`.
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Parses a daily target: `8h`, `7h30m`, `45m`, `07:30` or plain minutes.
pub fn parse_duration(input: &str) -> AppResult<i64> {
    let s = input.trim().to_ascii_lowercase();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(n) = s.parse::<i64>() {
        return if n >= 0 { Ok(n) } else { Err(invalid()) };
    }

    if let Some((h, m)) = s.split_once(':') {
        let h: i64 = h.parse().map_err(|_| invalid())?;
        let m: i64 = m.parse().map_err(|_| invalid())?;
        if h < 0 || !(0..60).contains(&m) {
            return Err(invalid());
        }
        return h
            .checked_mul(60)
            .and_then(|t| t.checked_add(m))
            .ok_or_else(invalid);
    }

    // 7h30m / 8h / 45m
    let mut total: i64 = 0;
    let mut digits = String::new();
    let mut seen_unit = false;

    for c in s.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' => {
                let n: i64 = digits.parse().map_err(|_| invalid())?;
                digits.clear();
                let minutes = if c == 'h' { n.checked_mul(60) } else { Some(n) };
                total = minutes
                    .and_then(|m| total.checked_add(m))
                    .ok_or_else(invalid)?;
                seen_unit = true;
            }
            ' ' => {}
            _ => return Err(invalid()),
        }
    }

    if !digits.is_empty() || !seen_unit {
        return Err(invalid());
    }

    Ok(total)
}
