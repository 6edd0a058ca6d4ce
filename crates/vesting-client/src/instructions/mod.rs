//! Builders for the program's instructions. Data is Anchor-encoded: an
//! 8-byte `sha256("global:<name>")` prefix followed by borsh arguments.

pub mod claim_tokens;
pub mod create_employee_account;
pub mod create_vesting_account;

pub use claim_tokens::*;
pub use create_employee_account::*;
pub use create_vesting_account::*;

#[cfg(test)]
pub(crate) fn sighash(name: &str) -> [u8; 8] {
    use sha2::{Digest, Sha256};

    let hash = Sha256::digest(format!("global:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash[..8]);
    out
}
