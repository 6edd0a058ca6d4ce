//! Program-wide constants shared with the deployed vesting program.

/// Seed tag for the company treasury token account.
pub const TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed tag for employee records. The misspelling is part of the deployed
/// address space and must not be corrected.
pub const EMPLOYEE_SEED: &[u8] = b"emplyee_vesting";

/// Longest single seed accepted by program address derivation.
pub const MAX_SEED_LEN: usize = 32;

/// `#[max_len]` of the string fields stored on-chain.
pub const MAX_NAME_LEN: usize = 50;

/// Anchor account discriminator width.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Display name used when an enrolled employee is left unnamed.
pub const DEFAULT_EMPLOYEE_NAME: &str = "Employee";

/// Raw failure messages are cut to this many characters for display.
pub const MAX_DIAGNOSTIC_CHARS: usize = 150;

/// Trailing simulation log lines kept for diagnostics.
pub const DIAGNOSTIC_LOG_LINES: usize = 2;

/// SPL token `InsufficientFunds` custom error.
pub const TOKEN_INSUFFICIENT_FUNDS: u32 = 1;
