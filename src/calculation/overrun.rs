//! Proportional overrun penalty.
//!
//! Both the meeting-level overtime rule and the per-agenda-item rule take one
//! point per started 10% of overrun. The ratio is evaluated with integer
//! arithmetic so boundary cases (exactly 10%, 20%, ...) are exact.

/// Returns the (non-positive) penalty for spending `actual` against a budget
/// of `allotted`, in any common unit.
///
/// The penalty is `-ceil((actual / allotted - 1) * 10)`. An empty budget or
/// no overrun yields 0. Unlike a floating-point evaluation, 33 of 30 costs 1
/// point rather than 2.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::overrun_penalty;
///
/// assert_eq!(overrun_penalty(45, 30), -5); // 50% over
/// assert_eq!(overrun_penalty(31, 30), -1); // any overrun costs a point
/// assert_eq!(overrun_penalty(33, 30), -1); // exactly 10% over
/// assert_eq!(overrun_penalty(30, 30), 0);
/// assert_eq!(overrun_penalty(10, 0), 0);
/// ```
pub fn overrun_penalty(actual: u64, allotted: u64) -> i32 {
    if allotted == 0 || actual <= allotted {
        return 0;
    }

    // ceil(10 * (actual - allotted) / allotted)
    let excess_tenths = (actual - allotted).saturating_mul(10);
    let points = excess_tenths.div_ceil(allotted);

    -i32::try_from(points).unwrap_or(i32::MAX)
}
