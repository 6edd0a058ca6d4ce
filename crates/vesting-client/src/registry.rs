//! Listing of every schedule enrolled under a company.
//!
//! One bulk filtered read per call, no retries. Records that cannot be
//! decoded (legacy layouts, corruption) or that do not actually reference the
//! requested company are skipped and counted; they never fail the whole list.

use anchor_lang::prelude::*;

use crate::codec::decode_employee_record;
use crate::error::DecodeError;
use crate::rpc::{AccountFilter, AccountReader, KeyedAccount};
use crate::state::{EmployeeAccount, EmployeeHead};

/// A decoded schedule together with its address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeEntry {
    pub address: Pubkey,
    pub record: EmployeeAccount,
}

/// Result of a company scan: the decodable schedules sorted by `name`, plus
/// how many fetched accounts were dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeRoster {
    pub entries: Vec<EmployeeEntry>,
    pub skipped: usize,
}

impl EmployeeRoster {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Any dropped account hints at a legacy layout still on-chain.
    pub fn has_skipped(&self) -> bool {
        self.skipped > 0
    }
}

/// Filter selecting employee accounts whose back-reference is `company`.
pub fn company_filter(company: &Pubkey) -> AccountFilter {
    AccountFilter::memcmp_pubkey(EmployeeHead::VESTING_ACCOUNT_OFFSET, company)
}

pub fn list_employees_for_company<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    company: &Pubkey,
) -> std::result::Result<EmployeeRoster, crate::classify::FailureReport> {
    let filters = [company_filter(company)];
    let raw = reader.fetch_program_accounts(program_id, &filters)?;
    Ok(build_roster(company, raw))
}

/// Decode and order scan results. Split out so the policy is testable on
/// its own.
pub fn build_roster(company: &Pubkey, raw: Vec<KeyedAccount>) -> EmployeeRoster {
    let mut roster = EmployeeRoster::default();

    for KeyedAccount { address, data } in raw {
        match decode_for_company(company, &data) {
            Ok(record) => roster.entries.push(EmployeeEntry { address, record }),
            Err(reason) => {
                msg!("skipping employee account {}: {}", address, reason);
                roster.skipped += 1;
            }
        }
    }

    roster
        .entries
        .sort_by(|a, b| a.record.name.cmp(&b.record.name).then(a.address.cmp(&b.address)));

    if roster.has_skipped() {
        msg!(
            "company {}: {} schedules listed, {} skipped",
            company,
            roster.len(),
            roster.skipped
        );
    }
    roster
}

#[derive(Debug, thiserror::Error)]
enum SkipReason {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("references company {0}")]
    ForeignCompany(Pubkey),
}

fn decode_for_company(company: &Pubkey, data: &[u8]) -> std::result::Result<EmployeeAccount, SkipReason> {
    // Cheap check on the fixed prefix before a full decode.
    if let Some(head) = EmployeeHead::peek(data) {
        if head.vesting_account() != *company {
            return Err(SkipReason::ForeignCompany(head.vesting_account()));
        }
    }
    let record = decode_employee_record(data)?;
    if record.vesting_account != *company {
        return Err(SkipReason::ForeignCompany(record.vesting_account));
    }
    Ok(record)
}
