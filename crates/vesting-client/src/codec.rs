//! Decoding of raw account bytes into typed records. Fails closed: bytes
//! that do not match the expected layout are a `LayoutMismatch`, never a
//! best-effort guess.

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::error::{DecodeError, MismatchReason};
use crate::state::{EmployeeAccount, VestingAccount};

pub fn decode_company_account(data: &[u8]) -> std::result::Result<VestingAccount, DecodeError> {
    decode_account(data)
}

pub fn decode_employee_record(data: &[u8]) -> std::result::Result<EmployeeAccount, DecodeError> {
    decode_account(data)
}

/// Decode a fetched account that may not exist yet. `None` and an empty
/// payload both mean the account is absent.
pub fn decode_maybe<T>(data: Option<&[u8]>) -> std::result::Result<Option<T>, DecodeError>
where
    T: AnchorDeserialize + Discriminator,
{
    match decode_account::<T>(data.unwrap_or_default()) {
        Ok(account) => Ok(Some(account)),
        Err(DecodeError::AccountAbsent) => Ok(None),
        Err(e) => Err(e),
    }
}

fn decode_account<T>(data: &[u8]) -> std::result::Result<T, DecodeError>
where
    T: AnchorDeserialize + Discriminator,
{
    if data.is_empty() {
        return Err(DecodeError::AccountAbsent);
    }
    let disc = T::DISCRIMINATOR;
    if data.len() < disc.len() {
        return Err(DecodeError::LayoutMismatch(MismatchReason::Truncated));
    }
    let (head, mut body) = data.split_at(disc.len());
    if head != disc {
        return Err(DecodeError::LayoutMismatch(MismatchReason::Discriminator));
    }
    // Trailing bytes are allocation padding and are ignored.
    T::deserialize(&mut body).map_err(|_| DecodeError::LayoutMismatch(MismatchReason::Body))
}
