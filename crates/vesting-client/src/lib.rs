//! Client-side core for the company token vesting program.
//!
//! Mirrors the deployed program's address derivation, account layout and
//! vesting arithmetic so a wallet UI can decide what to show and submit
//! without trusting the network. Network access goes through the narrow
//! traits in [`rpc`].

use anchor_lang::prelude::*;

pub mod classify;
pub mod client;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod registry;
pub mod rpc;
pub mod state;
pub mod utils;

pub use classify::{classify, ErrorCategory, FailureReport};
pub use client::{CreatedCompany, FoundSchedule, ScheduleLookup, VestingClient};
pub use codec::{decode_company_account, decode_employee_record};
pub use config::VestingConfig;
pub use error::{
    ClientError, DecodeError, InputError, InvariantViolation, MismatchReason, VestingError,
};
pub use registry::{list_employees_for_company, EmployeeEntry, EmployeeRoster};
pub use state::{EmployeeAccount, VestingAccount};
pub use utils::pda::derive_address;
pub use utils::vesting_math::{
    claimable_amount, claimed_percent, vested_amount, ClaimEligibility, ScheduleStatus,
};

declare_id!("FqzkXZdwYjurnUKetJCAvaUw5WAqbwzU6gZEwydeEfqS");
