//! Meeting cost calculation.
//!
//! Attendees are costed by the hourly rate of their salary band. This module
//! turns those rates into a per-second burn rate, a pre-meeting estimate and
//! the running cost of a meeting in progress.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::SalaryBands;
use crate::error::EngineResult;
use crate::models::{Attendee, MeetingCostEstimate};

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Rounds a monetary amount to cents, midpoint away from zero.
///
/// ```
/// use meeting_cost_engine::calculation::round_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_cents(Decimal::from_str("2.345").unwrap()), Decimal::from_str("2.35").unwrap());
/// ```
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn hourly_total(attendees: &[Attendee], bands: &SalaryBands) -> EngineResult<Decimal> {
    attendees.iter().try_fold(Decimal::ZERO, |total, attendee| {
        Ok(total + bands.hourly_rate(&attendee.role)?)
    })
}

/// Returns the combined cost of all attendees per second.
///
/// # Errors
///
/// Returns [`EngineError::RoleNotFound`](crate::error::EngineError::RoleNotFound)
/// if any attendee's role has no salary band.
pub fn cost_per_second(attendees: &[Attendee], bands: &SalaryBands) -> EngineResult<Decimal> {
    Ok(hourly_total(attendees, bands)? / SECONDS_PER_HOUR)
}

/// Estimates the cost of a planned meeting.
///
/// The estimate is the combined hourly rate prorated over the scheduled
/// minutes, rounded to cents.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::estimate_meeting_cost;
/// use meeting_cost_engine::config::SalaryBands;
/// use meeting_cost_engine::models::Attendee;
/// use rust_decimal::Decimal;
///
/// let attendees = vec![
///     Attendee { id: "a".into(), name: "Ana".into(), role: "Senior".into() },
///     Attendee { id: "b".into(), name: "Bo".into(), role: "Junior".into() },
/// ];
///
/// let estimate = estimate_meeting_cost(&attendees, 30, &SalaryBands::standard()).unwrap();
/// // (85 + 45) / 2
/// assert_eq!(estimate.estimated_cost, Decimal::new(6500, 2));
/// ```
pub fn estimate_meeting_cost(
    attendees: &[Attendee],
    scheduled_minutes: u32,
    bands: &SalaryBands,
) -> EngineResult<MeetingCostEstimate> {
    let hourly = hourly_total(attendees, bands)?;
    let estimated_cost = round_cents(hourly * Decimal::from(scheduled_minutes) / MINUTES_PER_HOUR);

    Ok(MeetingCostEstimate {
        attendee_count: u32::try_from(attendees.len()).unwrap_or(u32::MAX),
        cost_per_second: hourly / SECONDS_PER_HOUR,
        cost_per_minute: hourly / MINUTES_PER_HOUR,
        estimated_cost,
    })
}

/// Converts timer seconds into billed minutes, counting any started minute.
///
/// ```
/// use meeting_cost_engine::calculation::actual_minutes_from_elapsed;
///
/// assert_eq!(actual_minutes_from_elapsed(0), 0);
/// assert_eq!(actual_minutes_from_elapsed(60), 1);
/// assert_eq!(actual_minutes_from_elapsed(61), 2);
/// ```
pub fn actual_minutes_from_elapsed(elapsed_seconds: u64) -> u32 {
    u32::try_from(elapsed_seconds.div_ceil(60)).unwrap_or(u32::MAX)
}

/// Cost of a meeting that has been running for `elapsed_seconds`, in cents.
pub fn running_cost(elapsed_seconds: u64, cost_per_second: Decimal) -> Decimal {
    round_cents(Decimal::from(elapsed_seconds) * cost_per_second)
}

/// Recovers a per-second rate from a meeting's total cost.
///
/// Divides by the actual duration, falls back to the scheduled duration when
/// nothing was recorded, and yields zero when both are zero.
///
/// ```
/// use meeting_cost_engine::calculation::per_second_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(per_second_rate(Decimal::from(120), 60, 600), Decimal::from(2));
/// assert_eq!(per_second_rate(Decimal::from(120), 0, 600), Decimal::new(2, 1));
/// assert_eq!(per_second_rate(Decimal::from(120), 0, 0), Decimal::ZERO);
/// ```
pub fn per_second_rate(total_cost: Decimal, actual_seconds: u64, scheduled_seconds: u64) -> Decimal {
    if actual_seconds > 0 {
        total_cost / Decimal::from(actual_seconds)
    } else if scheduled_seconds > 0 {
        total_cost / Decimal::from(scheduled_seconds)
    } else {
        Decimal::ZERO
    }
}
