//! Translation of transaction and transport failures into the categories
//! shown to users. Pure and synchronous; never panics on any input.

use anchor_lang::error::ErrorCode;

use crate::constants::{DIAGNOSTIC_LOG_LINES, MAX_DIAGNOSTIC_CHARS, TOKEN_INSUFFICIENT_FUNDS};
use crate::error::VestingError;

/// What is known about a failed network or transaction call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureReport {
    /// Program error code, when the transport already extracted one.
    pub code: Option<u32>,
    pub message: Option<String>,
    /// Message of the underlying cause, e.g. from the wallet.
    pub cause: Option<String>,
    /// Simulation log lines.
    pub logs: Vec<String>,
    /// HTTP-level status of the RPC call.
    pub transport_status: Option<u16>,
}

impl FailureReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_logs<I, S>(mut self, logs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.logs = logs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.transport_status = Some(status);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCategory {
    #[error("Cliff period not reached yet. You must wait until the cliff date to claim tokens.")]
    CliffNotReached,

    #[error("All available tokens have been claimed. Check back later as more tokens vest.")]
    FullyClaimed,

    #[error("Permission denied. You don't own this vesting account.")]
    PermissionDenied,

    #[error("This account already exists. Try a different company name or employee.")]
    AccountAlreadyExists,

    #[error("Insufficient funds. The wallet cannot cover fees or the treasury cannot cover the transfer.")]
    InsufficientFunds,

    #[error("Account not found. Double-check the company name (case-sensitive) and ensure it was created.")]
    AccountNotFound,

    #[error("Transaction cancelled by user.")]
    UserCancelled,

    #[error("Network rate limit. Try again in 30 seconds or switch RPC endpoint.")]
    RateLimited,

    #[error("Network error. Check your internet connection or try a different RPC.")]
    NetworkError,

    #[error(
        "Transaction would fail. Common causes: wrong token mint address, account already exists, \
         insufficient token balance in treasury.{}",
        log_suffix(.logs)
    )]
    SimulationFailed { logs: Vec<String> },

    #[error("Error: {message}{}", cause_suffix(.cause))]
    Unknown {
        message: String,
        cause: Option<String>,
    },
}

fn log_suffix(logs: &[String]) -> String {
    if logs.is_empty() {
        String::new()
    } else {
        format!(" Logs: {}", logs.join(" | "))
    }
}

fn cause_suffix(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!(" Cause: {cause}"),
        None => String::new(),
    }
}

/// Pick the first matching category; rules are checked in priority order.
pub fn classify(failure: &FailureReport) -> ErrorCategory {
    let message = failure.message.as_deref().unwrap_or_default().to_lowercase();
    let cause = failure.cause.as_deref().unwrap_or_default().to_lowercase();
    let logs = failure.logs.join("\n").to_lowercase();
    let codes = program_codes(failure);
    let has_code = |code: u32| codes.contains(&code);

    if has_code(VestingError::ClaimNotAvailableYet.into()) {
        return ErrorCategory::CliffNotReached;
    }
    if has_code(VestingError::NothingToClaim.into()) {
        return ErrorCategory::FullyClaimed;
    }
    if has_code(ErrorCode::ConstraintHasOne.into()) {
        return ErrorCategory::PermissionDenied;
    }
    if has_code(ErrorCode::ConstraintSeeds.into()) || logs.contains("already in use") {
        return ErrorCategory::AccountAlreadyExists;
    }
    if has_code(TOKEN_INSUFFICIENT_FUNDS)
        || logs.contains("insufficient funds")
        || logs.contains("insufficient lamports")
        || message.contains("insufficient")
    {
        return ErrorCategory::InsufficientFunds;
    }
    if ["accountnotfound", "does not exist", "not found"]
        .iter()
        .any(|needle| message.contains(needle))
    {
        return ErrorCategory::AccountNotFound;
    }
    if cause.contains("user rejected")
        || message.contains("rejected")
        || message.contains("cancelled")
    {
        return ErrorCategory::UserCancelled;
    }
    if failure.transport_status == Some(429) || message.contains("429") || cause.contains("429") {
        return ErrorCategory::RateLimited;
    }
    if failure
        .transport_status
        .is_some_and(|status| !(200..300).contains(&status))
        || message.contains("fetch")
        || message.contains("network")
        || cause.contains("fetch")
    {
        return ErrorCategory::NetworkError;
    }
    if message.contains("simulation failed")
        || message.contains("transaction plan failed")
        || !codes.is_empty()
    {
        let keep = failure.logs.len().saturating_sub(DIAGNOSTIC_LOG_LINES);
        return ErrorCategory::SimulationFailed {
            logs: failure.logs[keep..].to_vec(),
        };
    }

    let message = match failure.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m.chars().take(MAX_DIAGNOSTIC_CHARS).collect(),
        _ => "Unknown error".to_string(),
    };
    ErrorCategory::Unknown {
        message,
        cause: failure.cause.clone(),
    }
}

/// Every program error code reported: the explicit code, the runtime's
/// `custom program error: 0x1770`, and Anchor's `Error Number: 6000.`.
/// Other hex-looking text (return data, addresses) is ignored.
fn program_codes(failure: &FailureReport) -> Vec<u32> {
    let mut codes: Vec<u32> = failure.code.into_iter().collect();
    for line in &failure.logs {
        let line = line.to_lowercase();
        if let Some((_, rest)) = line.split_once("custom program error:") {
            let hex: String = rest
                .trim_start()
                .strip_prefix("0x")
                .unwrap_or_default()
                .chars()
                .take_while(char::is_ascii_hexdigit)
                .collect();
            if let Ok(code) = u32::from_str_radix(&hex, 16) {
                codes.push(code);
            }
        }
        if let Some((_, rest)) = line.split_once("error number:") {
            let digits: String = rest
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            if let Ok(code) = digits.parse() {
                codes.push(code);
            }
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(log: &str) -> FailureReport {
        FailureReport::new("Transaction simulation failed").with_logs([
            "Program FqzkXZdwYjurnUKetJCAvaUw5WAqbwzU6gZEwydeEfqS invoke [1]",
            log,
        ])
    }

    #[test]
    fn cliff_code_in_logs() {
        let failure = sim("Program FqzkXZdwYjurnUKetJCAvaUw5WAqbwzU6gZEwydeEfqS failed: custom program error: 0x1770");
        assert_eq!(classify(&failure), ErrorCategory::CliffNotReached);
    }

    #[test]
    fn anchor_error_number() {
        let failure = sim("Program log: AnchorError occurred. Error Code: NothingToClaim. Error Number: 6003. Error Message: There is nothing to claim.");
        assert_eq!(classify(&failure), ErrorCategory::FullyClaimed);
    }

    #[test]
    fn explicit_code_wins_without_logs() {
        let failure = FailureReport::default().with_code(6000);
        assert_eq!(classify(&failure), ErrorCategory::CliffNotReached);
    }

    #[test]
    fn constraint_codes() {
        assert_eq!(
            classify(&sim("custom program error: 0x7d1")),
            ErrorCategory::PermissionDenied
        );
        assert_eq!(
            classify(&sim("custom program error: 0x7d6")),
            ErrorCategory::AccountAlreadyExists
        );
        assert_eq!(
            classify(&sim("Allocate: account Address { address: Xyz, base: None } already in use")),
            ErrorCategory::AccountAlreadyExists
        );
    }

    #[test]
    fn cliff_outranks_everything_else() {
        let failure = FailureReport::new("insufficient network fetch")
            .with_cause("user rejected the request")
            .with_status(429)
            .with_logs(["custom program error: 0x1770", "already in use"]);
        assert_eq!(classify(&failure), ErrorCategory::CliffNotReached);
    }

    #[test]
    fn unrelated_codes_are_not_insufficient_funds() {
        // 0x1771 contains "0x1" as a prefix but is a different code.
        let failure = sim("custom program error: 0x1771");
        assert!(matches!(
            classify(&failure),
            ErrorCategory::SimulationFailed { .. }
        ));
    }

    #[test]
    fn insufficient_funds() {
        assert_eq!(
            classify(&sim("Transfer: insufficient lamports 10, need 5000")),
            ErrorCategory::InsufficientFunds
        );
        assert_eq!(
            classify(&sim("custom program error: 0x1")),
            ErrorCategory::InsufficientFunds
        );
    }

    #[test]
    fn account_not_found() {
        let failure = FailureReport::new("Account does not exist 9xQe...");
        assert_eq!(classify(&failure), ErrorCategory::AccountNotFound);
    }

    #[test]
    fn user_rejected_cause() {
        let failure = FailureReport::new("WalletSignTransactionError")
            .with_cause("user rejected the request");
        assert_eq!(classify(&failure), ErrorCategory::UserCancelled);
    }

    #[test]
    fn transport_failures() {
        assert_eq!(
            classify(&FailureReport::default().with_status(429)),
            ErrorCategory::RateLimited
        );
        assert_eq!(
            classify(&FailureReport::new("HTTP error (429): Too Many Requests")),
            ErrorCategory::RateLimited
        );
        assert_eq!(
            classify(&FailureReport::new("failed to fetch")),
            ErrorCategory::NetworkError
        );
        assert_eq!(
            classify(&FailureReport::default().with_status(503)),
            ErrorCategory::NetworkError
        );
    }

    #[test]
    fn success_status_is_not_a_transport_failure() {
        let failure = FailureReport::new("Transaction simulation failed")
            .with_status(200)
            .with_logs(["Program failed: custom program error: 0x1771"]);
        assert_eq!(
            classify(&failure),
            ErrorCategory::SimulationFailed {
                logs: vec!["Program failed: custom program error: 0x1771".to_string()]
            }
        );
    }

    #[test]
    fn hex_in_return_data_is_not_a_code() {
        let failure = FailureReport::default().with_logs(["Program return: Fqzk AAA+0x1="]);
        assert!(matches!(classify(&failure), ErrorCategory::Unknown { .. }));

        let failure = FailureReport::default().with_logs(["Program log: moved 0x1770 lamports"]);
        assert!(matches!(classify(&failure), ErrorCategory::Unknown { .. }));
    }

    #[test]
    fn simulation_keeps_last_two_lines() {
        let failure = FailureReport::new("Transaction simulation failed")
            .with_logs(["a", "b", "c"]);
        assert_eq!(
            classify(&failure),
            ErrorCategory::SimulationFailed {
                logs: vec!["b".to_string(), "c".to_string()]
            }
        );
        assert!(classify(&failure).to_string().ends_with("Logs: b | c"));
    }

    #[test]
    fn empty_failure_is_unknown_with_diagnostic() {
        match classify(&FailureReport::default()) {
            ErrorCategory::Unknown { message, cause } => {
                assert!(!message.is_empty());
                assert!(cause.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_truncates_and_keeps_cause() {
        let long = "x".repeat(400);
        let failure = FailureReport::new(long).with_cause("boom");
        match classify(&failure) {
            ErrorCategory::Unknown { message, cause } => {
                assert_eq!(message.chars().count(), MAX_DIAGNOSTIC_CHARS);
                assert_eq!(cause.as_deref(), Some("boom"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(classify(&failure).to_string().ends_with("Cause: boom"));
    }
}
