/// Forward predictions derived from the recorded cycle history
///
/// All functions here are pure and read-only over a slice of cycles kept in
/// insertion order, newest first. The cycle at index 0 is the reference
/// point for every prediction, even when an older period was entered after
/// a newer one.
///
/// The "average cycle length" is the mean of recorded period lengths
/// (end minus start), which is then used as the gap between consecutive
/// period starts.

use chrono::{Duration, Local, NaiveDate};
use crate::domain::Cycle;

/// Cycle length assumed when the history is too thin to average
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

/// Today's date on the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Average cycle length in whole days
///
/// Returns [`DEFAULT_CYCLE_LENGTH`] with fewer than two cycles or when no
/// cycle has an end date. Otherwise averages `end - start` over the
/// completed cycles and rounds half up.
pub fn average_cycle_length(cycles: &[Cycle]) -> i64 {
    if cycles.len() < 2 {
        return DEFAULT_CYCLE_LENGTH;
    }

    let lengths: Vec<i64> = cycles.iter().filter_map(Cycle::period_length).collect();
    if lengths.is_empty() {
        return DEFAULT_CYCLE_LENGTH;
    }

    let total: i64 = lengths.iter().sum();
    round_half_up(total, lengths.len() as i64)
}

/// The cycle used as the anchor for predictions (most recently added)
pub fn reference_cycle(cycles: &[Cycle]) -> Option<&Cycle> {
    cycles.first()
}

/// Date the next period is expected to start
pub fn predicted_period_date(cycles: &[Cycle]) -> Option<NaiveDate> {
    let reference = reference_cycle(cycles)?;
    offset_date(reference.start_date, average_cycle_length(cycles))
}

/// Date of the next expected ovulation, at the midpoint of the average cycle
pub fn predicted_ovulation_date(cycles: &[Cycle]) -> Option<NaiveDate> {
    let reference = reference_cycle(cycles)?;
    let offset = average_cycle_length(cycles).div_euclid(2);
    offset_date(reference.start_date, offset)
}

/// Days until the next predicted period
///
/// `None` when there is no history, or when the predicted date is today or
/// already in the past.
pub fn next_period_countdown(cycles: &[Cycle], today: NaiveDate) -> Option<i64> {
    countdown(predicted_period_date(cycles)?, today)
}

/// Days until the next predicted ovulation, with the same absent rules as
/// [`next_period_countdown`]
pub fn next_ovulation_countdown(cycles: &[Cycle], today: NaiveDate) -> Option<i64> {
    countdown(predicted_ovulation_date(cycles)?, today)
}

/// Whole days from `today` to `target`, or `None` when not in the future
fn countdown(target: NaiveDate, today: NaiveDate) -> Option<i64> {
    let days = (target - today).num_days();
    if days > 0 {
        Some(days)
    } else {
        None
    }
}

fn offset_date(start: NaiveDate, days: i64) -> Option<NaiveDate> {
    start.checked_add_signed(Duration::try_days(days)?)
}

/// Integer mean rounded to nearest, ties toward positive infinity
fn round_half_up(total: i64, count: i64) -> i64 {
    (2 * total + count).div_euclid(2 * count)
}
