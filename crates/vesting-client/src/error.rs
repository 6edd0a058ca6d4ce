use anchor_lang::prelude::*;

use crate::classify::ErrorCategory;

/// Custom error codes raised by the deployed vesting program. Declared here
/// only so the numeric codes (6000 + index) line up with the program's own.
#[error_code]
pub enum VestingError {
    #[msg("Claiming is not available yet")]
    ClaimNotAvailableYet,

    #[msg("Invalid vesting period")]
    InvalidVestingPeriod,

    #[msg("Calculation overflow")]
    CalculationOverflow,

    #[msg("There is nothing to claim")]
    NothingToClaim,
}

/// Why raw account bytes were refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MismatchReason {
    #[error("discriminator does not match")]
    Discriminator,

    #[error("data shorter than a discriminator")]
    Truncated,

    #[error("body does not match the expected layout")]
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Zero-length payload: nothing has been created at the address yet.
    #[error("account does not exist")]
    AccountAbsent,

    #[error("account layout mismatch: {0}")]
    LayoutMismatch(MismatchReason),
}

/// More has been withdrawn than has vested: a stale read or corrupted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("withdrawn amount {withdrawn} exceeds vested amount {vested}")]
pub struct InvariantViolation {
    pub vested: u64,
    pub withdrawn: u64,
}

/// Rejected user input, caught before anything is derived or sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("company name is required")]
    EmptyCompanyName,

    #[error("name is {len} bytes, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("token amount must be a positive number")]
    InvalidAmount,

    #[error("schedule times must satisfy start <= cliff <= end (got {start}, {cliff}, {end})")]
    InvalidPeriod { start: i64, cliff: i64, end: i64 },

    #[error("at least one employee is required")]
    NoEmployees,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Failed(#[from] ErrorCategory),
}
