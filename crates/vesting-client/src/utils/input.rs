//! Validation of user-supplied names, addresses and schedules. Everything
//! here runs before an address is derived or an instruction is built.

use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_EMPLOYEE_NAME, MAX_NAME_LEN, MAX_SEED_LEN};
use crate::error::InputError;

/// A trimmed, non-empty company name short enough to be a single seed.
/// Case-sensitive: "Acme" and "acme" are different companies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn parse(raw: &str) -> std::result::Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyCompanyName);
        }
        if trimmed.len() > MAX_SEED_LEN {
            return Err(InputError::NameTooLong {
                len: trimmed.len(),
                max: MAX_SEED_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a base58 wallet or mint address.
pub fn parse_address(raw: &str) -> std::result::Result<Pubkey, InputError> {
    let trimmed = raw.trim();
    Pubkey::from_str(trimmed).map_err(|_| InputError::InvalidAddress(trimmed.to_string()))
}

/// One row of a batch enrollment as typed by the admin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub name: String,
    pub beneficiary: String,
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    pub total_amount: u64,
}

/// A validated enrollment row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeSchedule {
    pub name: String,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    pub total_amount: u64,
}

impl EmployeeInput {
    pub fn validate(&self) -> std::result::Result<EmployeeSchedule, InputError> {
        let beneficiary = parse_address(&self.beneficiary)?;
        if self.total_amount == 0 {
            return Err(InputError::InvalidAmount);
        }
        if !(self.start_time <= self.cliff_time && self.cliff_time <= self.end_time) {
            return Err(InputError::InvalidPeriod {
                start: self.start_time,
                cliff: self.cliff_time,
                end: self.end_time,
            });
        }

        let name = match self.name.trim() {
            "" => DEFAULT_EMPLOYEE_NAME.to_string(),
            n => n.to_string(),
        };
        if name.len() > MAX_NAME_LEN {
            return Err(InputError::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }

        Ok(EmployeeSchedule {
            name,
            beneficiary,
            start_time: self.start_time,
            end_time: self.end_time,
            cliff_time: self.cliff_time,
            total_amount: self.total_amount,
        })
    }
}
