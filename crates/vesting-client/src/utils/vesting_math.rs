//! Linear vesting with a cliff, mirroring the program's claim arithmetic.
//! - before `cliff_time`: nothing vested
//! - at or after `end_time`: everything vested
//! - otherwise: `floor(total * (now - start) / (end - start))`

use crate::error::InvariantViolation;
use crate::state::EmployeeAccount;

/// Amount vested at `now` (Unix seconds). Never over-reports.
pub fn vested_amount(record: &EmployeeAccount, now: i64) -> u64 {
    if now < record.cliff_time {
        return 0;
    }
    if now >= record.end_time {
        return record.total_amount;
    }

    // i128 keeps differences of arbitrary i64 timestamps exact.
    let duration = record.end_time as i128 - record.start_time as i128;
    if duration <= 0 {
        // start == end and now < end.
        return 0;
    }
    let elapsed = (now as i128 - record.start_time as i128).clamp(0, duration);

    let vested = record.total_amount as u128 * elapsed as u128 / duration as u128;
    // elapsed < duration, so vested < total_amount.
    vested.min(record.total_amount as u128) as u64
}

/// Vested but not yet withdrawn. Errors instead of clamping when the record
/// shows more withdrawn than vested.
pub fn claimable_amount(record: &EmployeeAccount, now: i64) -> Result<u64, InvariantViolation> {
    let vested = vested_amount(record, now);
    vested
        .checked_sub(record.total_withdrawn)
        .ok_or(InvariantViolation {
            vested,
            withdrawn: record.total_withdrawn,
        })
}

/// Percentage of the grant already withdrawn, rounded to the nearest integer.
pub fn claimed_percent(record: &EmployeeAccount) -> u8 {
    if record.total_amount == 0 {
        return 0;
    }
    let total = record.total_amount as u128;
    let pct = (record.total_withdrawn as u128 * 200 + total) / (total * 2);
    pct.min(u8::MAX as u128) as u8
}

/// Roster status of one schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    Complete,
    Locked { unlocks_at: i64 },
    Vesting,
}

impl ScheduleStatus {
    pub fn of(record: &EmployeeAccount, now: i64) -> Self {
        if record.total_withdrawn >= record.total_amount {
            ScheduleStatus::Complete
        } else if now < record.cliff_time {
            ScheduleStatus::Locked {
                unlocks_at: record.cliff_time,
            }
        } else {
            ScheduleStatus::Vesting
        }
    }
}

/// What a beneficiary can do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimEligibility {
    CliffActive { unlocks_at: i64 },
    Claimable(u64),
    NothingToClaim,
}

impl ClaimEligibility {
    pub fn of(record: &EmployeeAccount, now: i64) -> Result<Self, InvariantViolation> {
        if now < record.cliff_time {
            return Ok(ClaimEligibility::CliffActive {
                unlocks_at: record.cliff_time,
            });
        }
        match claimable_amount(record, now)? {
            0 => Ok(ClaimEligibility::NothingToClaim),
            amount => Ok(ClaimEligibility::Claimable(amount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn record(start: i64, cliff: i64, end: i64, total: u64, withdrawn: u64) -> EmployeeAccount {
        EmployeeAccount {
            beneficiary: Pubkey::new_unique(),
            start_time: start,
            end_time: end,
            cliff_time: cliff,
            vesting_account: Pubkey::new_unique(),
            total_amount: total,
            total_withdrawn: withdrawn,
            name: "Test".to_string(),
            bump: 255,
        }
    }

    #[test]
    fn scenario_cliff_then_linear() {
        let r = record(0, 100, 1000, 1000, 0);
        assert_eq!(claimable_amount(&r, 50).unwrap(), 0);
        assert_eq!(vested_amount(&r, 100), 100);
        assert_eq!(claimable_amount(&r, 100).unwrap(), 100);
        assert_eq!(vested_amount(&r, 1000), 1000);
        assert_eq!(claimable_amount(&r, 1000).unwrap(), 1000);

        let done = record(0, 100, 1000, 1000, 1000);
        assert_eq!(claimable_amount(&done, 1000).unwrap(), 0);
    }

    #[test]
    fn zero_at_start_when_cliff_later() {
        let r = record(500, 600, 1500, 10_000, 0);
        assert_eq!(vested_amount(&r, 500), 0);
    }

    #[test]
    fn value_at_cliff_is_prorated() {
        let r = record(0, 333, 1000, 999, 0);
        assert_eq!(vested_amount(&r, 333), 999 * 333 / 1000);

        // cliff == end vests everything at once.
        let r = record(0, 1000, 1000, 999, 0);
        assert_eq!(vested_amount(&r, 1000), 999);
        assert_eq!(vested_amount(&r, 999), 0);
    }

    #[test]
    fn truncates_toward_zero() {
        let r = record(0, 0, 3, 10, 0);
        assert_eq!(vested_amount(&r, 1), 3);
        assert_eq!(vested_amount(&r, 2), 6);
    }

    #[test]
    fn monotonic_and_idempotent_past_end() {
        let r = record(1_700_000_000, 1_700_086_400, 1_731_536_000, 7_777_777, 0);
        let mut prev = 0;
        for t in (1_699_990_000..1_731_600_000).step_by(86_400 * 3) {
            let v = vested_amount(&r, t);
            assert!(v >= prev);
            prev = v;
        }
        for t in [r.end_time, r.end_time + 1, i64::MAX] {
            assert_eq!(vested_amount(&r, t), r.total_amount);
        }
    }

    #[test]
    fn degenerate_period_never_divides() {
        let r = record(1000, 1000, 1000, 500, 0);
        assert_eq!(vested_amount(&r, 999), 0);
        assert_eq!(vested_amount(&r, 1000), 500);
        assert_eq!(vested_amount(&r, 5000), 500);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let r = record(0, 0, 2, u64::MAX, 0);
        assert_eq!(vested_amount(&r, 1), u64::MAX / 2);
        let r = record(i64::MIN, i64::MIN, i64::MAX, u64::MAX, 0);
        assert!(vested_amount(&r, 0) <= u64::MAX);
    }

    #[test]
    fn over_withdrawn_is_surfaced() {
        let r = record(0, 100, 1000, 1000, 300);
        assert_eq!(
            claimable_amount(&r, 200),
            Err(InvariantViolation {
                vested: 200,
                withdrawn: 300
            })
        );
    }

    #[test]
    fn claimed_percent_rounds() {
        assert_eq!(claimed_percent(&record(0, 0, 1, 3, 1)), 33);
        assert_eq!(claimed_percent(&record(0, 0, 1, 3, 2)), 67);
        assert_eq!(claimed_percent(&record(0, 0, 1, 0, 0)), 0);
        assert_eq!(claimed_percent(&record(0, 0, 1, 200, 1)), 1);
    }

    #[test]
    fn status_ordering() {
        assert_eq!(
            ScheduleStatus::of(&record(0, 100, 1000, 1000, 1000), 50),
            ScheduleStatus::Complete
        );
        assert_eq!(
            ScheduleStatus::of(&record(0, 100, 1000, 1000, 0), 50),
            ScheduleStatus::Locked { unlocks_at: 100 }
        );
        assert_eq!(
            ScheduleStatus::of(&record(0, 100, 1000, 1000, 0), 150),
            ScheduleStatus::Vesting
        );
    }

    #[test]
    fn eligibility() {
        let r = record(0, 100, 1000, 1000, 100);
        assert_eq!(
            ClaimEligibility::of(&r, 99).unwrap(),
            ClaimEligibility::CliffActive { unlocks_at: 100 }
        );
        assert_eq!(ClaimEligibility::of(&r, 100).unwrap(), ClaimEligibility::NothingToClaim);
        assert_eq!(ClaimEligibility::of(&r, 500).unwrap(), ClaimEligibility::Claimable(400));
    }
}
