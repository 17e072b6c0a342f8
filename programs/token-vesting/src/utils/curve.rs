//! Periodic release-curve computation.
//! Authoritative formula:
//! - now < start + cliff            => 0
//! - elapsed = floor((now - start) / period), clamped to [0, period_count]
//! - elapsed >= period_count        => total_funded (exact, no stranded dust)
//! - otherwise                      => total_funded * elapsed / period_count (floor)
//!
//! The cliff is a gate only: period accrual counts from `start_ts`, so periods
//! that nominally elapsed during the cliff become releasable the instant the
//! gate passes.

use crate::error::VestingError;

/// Cumulative amount vested at `now`, before subtracting prior claims.
/// Pure and monotone non-decreasing in `now`.
pub fn releasable_total(
    now: i64,
    start_ts: i64,
    cliff_seconds: i64,
    period_seconds: i64,
    period_count: u32,
    total_funded: u64,
) -> Result<u64, VestingError> {
    if period_seconds <= 0 || period_count == 0 {
        return Err(VestingError::InvalidConfig);
    }

    let cliff_end = start_ts
        .checked_add(cliff_seconds)
        .ok_or(VestingError::MathOverflow)?;
    if now < cliff_end {
        return Ok(0);
    }

    let elapsed = now
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)?;
    if elapsed < 0 {
        return Ok(0);
    }

    let periods = (elapsed / period_seconds) as u64;
    if periods >= period_count as u64 {
        return Ok(total_funded);
    }

    let vested = (total_funded as u128)
        .checked_mul(periods as u128)
        .ok_or(VestingError::MathOverflow)?
        / (period_count as u128);
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn curve(now: i64) -> u64 {
        // 30-day cliff, 30-day periods, 10 periods, 100 tokens, start at t=0.
        releasable_total(now, 0, 30 * DAY, 30 * DAY, 10, 100).unwrap()
    }

    #[test]
    fn zero_before_cliff() {
        assert_eq!(curve(-1), 0);
        assert_eq!(curve(0), 0);
        assert_eq!(curve(30 * DAY - 1), 0);
    }

    #[test]
    fn cliff_boundary_inclusive() {
        // At the gate, the first period (which elapsed during the cliff) unlocks.
        assert_eq!(curve(30 * DAY), 10);
        assert_eq!(curve(60 * DAY - 1), 10);
        assert_eq!(curve(60 * DAY), 20);
    }

    #[test]
    fn thirty_day_scenario() {
        // Claims of 30, then 60, then the final 10 across the schedule's life.
        assert_eq!(curve(90 * DAY + 1), 30);
        assert_eq!(curve(270 * DAY + 1), 90);
        assert_eq!(curve(330 * DAY + 1), 100);
    }

    #[test]
    fn monotone_non_decreasing() {
        let mut prev = 0;
        for d in 0..400 {
            let v = curve(d * DAY);
            assert!(v >= prev, "curve decreased at day {}", d);
            prev = v;
        }
        assert_eq!(prev, 100);
    }

    #[test]
    fn floor_truncation_before_completion() {
        // 100 tokens over 7 periods of 1s each, no cliff.
        let v = |now| releasable_total(now, 0, 0, 1, 7, 100).unwrap();
        assert_eq!(v(1), 14); // floor(100 * 1 / 7)
        assert_eq!(v(3), 42); // floor(100 * 3 / 7)
        assert_eq!(v(6), 85); // floor(100 * 6 / 7)
    }

    #[test]
    fn exact_at_completion_regardless_of_remainder() {
        for total in [1u64, 99, 100, 101, 1_000_000_007] {
            for count in [1u32, 3, 7, 10] {
                let end = (count as i64) * 30 * DAY;
                let v = releasable_total(end, 0, 30 * DAY, 30 * DAY, count, total).unwrap();
                assert_eq!(v, total);
                // Far past the end it stays pinned at the funded total.
                let v = releasable_total(end * 10, 0, 30 * DAY, 30 * DAY, count, total).unwrap();
                assert_eq!(v, total);
            }
        }
    }

    #[test]
    fn cliff_longer_than_schedule_gates_everything() {
        // 5 one-day periods but a 10-day cliff: nothing until day 10, then all.
        let v = |now| releasable_total(now, 0, 10 * DAY, DAY, 5, 100).unwrap();
        assert_eq!(v(5 * DAY), 0);
        assert_eq!(v(10 * DAY - 1), 0);
        assert_eq!(v(10 * DAY), 100);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let v = releasable_total(3, 0, 0, 1, 1_000_000, u64::MAX).unwrap();
        assert_eq!(v, ((u64::MAX as u128) * 3 / 1_000_000) as u64);
    }

    #[test]
    fn rejects_degenerate_config() {
        assert!(matches!(
            releasable_total(10, 0, 0, 0, 10, 100),
            Err(VestingError::InvalidConfig)
        ));
        assert!(matches!(
            releasable_total(10, 0, 0, 1, 0, 100),
            Err(VestingError::InvalidConfig)
        ));
    }
}
