//! State mutations behind the clock-in/out and period editing commands.
//!
//! Everything here works on an in-memory `TrackerState`; persisting the
//! result is the caller's job (see `Core::commit`).

use crate::core::calculator::period::has_open_period;
use crate::errors::{AppError, AppResult};
use crate::models::period::TimePeriod;
use crate::models::state::TrackerState;
use crate::utils::time::MINUTES_PER_DAY;
use chrono::NaiveDate;

pub struct EntryLogic;

impl EntryLogic {
    /// Opens a new period starting at `time`.
    ///
    /// Refused while `date` or the day before still has an open period; the
    /// latter is a night shift that has to be clocked out on its start date.
    pub fn clock_in(state: &mut TrackerState, date: NaiveDate, time: &str) -> AppResult<()> {
        let previous = date.pred_opt();
        if let Some(open_day) = [Some(date), previous]
            .into_iter()
            .flatten()
            .find(|d| state.record(*d).is_some_and(has_open_period))
        {
            return Err(AppError::AlreadyClockedIn(open_day.to_string()));
        }

        state.record_mut(date).periods.push(TimePeriod::open(time));
        Ok(())
    }

    /// Closes the open period of `date` at `time`.
    pub fn clock_out(state: &mut TrackerState, date: NaiveDate, time: &str) -> AppResult<()> {
        let record = state
            .records
            .get_mut(&date)
            .filter(|r| has_open_period(r))
            .ok_or_else(|| AppError::NotClockedIn(date.to_string()))?;

        if let Some(last) = record.periods.last_mut() {
            last.end = Some(time.to_string());
        }
        Ok(())
    }

    /// Appends a manually entered period. Returns its 1-based index.
    pub fn add_period(
        state: &mut TrackerState,
        date: NaiveDate,
        start: Option<String>,
        end: Option<String>,
    ) -> AppResult<usize> {
        let period = TimePeriod::new(start, end);
        if period.is_empty() {
            return Err(AppError::EmptyPeriod);
        }

        let record = state.record_mut(date);
        record.periods.push(period);
        Ok(record.periods.len())
    }

    /// Replaces the given fields of period `index` (1-based).
    /// `reopen` clears the end time, turning the period back into an open one.
    pub fn edit_period(
        state: &mut TrackerState,
        date: NaiveDate,
        index: usize,
        start: Option<String>,
        end: Option<String>,
        reopen: bool,
    ) -> AppResult<()> {
        let record = state
            .records
            .get_mut(&date)
            .filter(|r| !r.periods.is_empty())
            .ok_or_else(|| AppError::NoPeriodsForDate(date.to_string()))?;

        let slot = record
            .period_mut(index)
            .ok_or(AppError::InvalidPeriod(index))?;

        let mut updated = slot.clone();
        if let Some(s) = start {
            updated.start = Some(s);
        }
        if let Some(e) = end {
            updated.end = Some(e);
        }
        if reopen {
            updated.end = None;
        }

        if updated.is_empty() {
            return Err(AppError::EmptyPeriod);
        }

        *slot = updated;
        Ok(())
    }

    /// Removes period `index` (1-based). The day record itself is kept.
    pub fn delete_period(
        state: &mut TrackerState,
        date: NaiveDate,
        index: usize,
    ) -> AppResult<TimePeriod> {
        let record = state
            .records
            .get_mut(&date)
            .filter(|r| !r.periods.is_empty())
            .ok_or_else(|| AppError::NoPeriodsForDate(date.to_string()))?;

        if index == 0 || index > record.periods.len() {
            return Err(AppError::InvalidPeriod(index));
        }

        Ok(record.periods.remove(index - 1))
    }

    /// Sets or clears (on `None` / blank text) the note of `date`.
    pub fn set_note(state: &mut TrackerState, date: NaiveDate, note: Option<String>) {
        let note = note.filter(|n| !n.trim().is_empty());
        state.record_mut(date).note = note;
    }

    pub fn set_target(state: &mut TrackerState, minutes: i64) -> AppResult<()> {
        if !(0..=MINUTES_PER_DAY).contains(&minutes) {
            return Err(AppError::InvalidDuration(minutes.to_string()));
        }
        state.daily_target_minutes = minutes;
        Ok(())
    }
}
