use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::constants::DISCRIMINATOR_LEN;

/// One beneficiary's schedule under a company. Address seeds are
/// (beneficiary, vesting_account), so there is at most one per pair.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct EmployeeAccount {
    pub beneficiary: Pubkey,
    /// Unix seconds.
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    /// Back-reference to the company account.
    pub vesting_account: Pubkey,
    pub total_amount: u64,
    /// Only ever increased, by successful claims.
    pub total_withdrawn: u64,
    #[max_len(50)]
    pub name: String,
    pub bump: u8,
}

/// Fixed-offset prefix of an employee account body (after the
/// discriminator). Only the fields preceding the first variable-length
/// field belong here.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct EmployeeHead {
    pub beneficiary: [u8; 32],
    pub start_time: [u8; 8],
    pub end_time: [u8; 8],
    pub cliff_time: [u8; 8],
    pub vesting_account: [u8; 32],
}

impl EmployeeHead {
    pub const SIZE: usize = core::mem::size_of::<EmployeeHead>();

    /// Absolute byte offset of `vesting_account` in raw account data; the
    /// bulk scan filters on it.
    pub const VESTING_ACCOUNT_OFFSET: usize =
        DISCRIMINATOR_LEN + core::mem::offset_of!(EmployeeHead, vesting_account);

    /// Borrow the prefix out of raw account data, discriminator included.
    pub fn peek(data: &[u8]) -> Option<&EmployeeHead> {
        let body = data.get(DISCRIMINATOR_LEN..DISCRIMINATOR_LEN + Self::SIZE)?;
        bytemuck::try_from_bytes(body).ok()
    }

    pub fn vesting_account(&self) -> Pubkey {
        Pubkey::new_from_array(self.vesting_account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_matches_scan_offset() {
        assert_eq!(EmployeeHead::SIZE, 88);
        assert_eq!(EmployeeHead::VESTING_ACCOUNT_OFFSET, 64);
    }

    #[test]
    fn head_reads_back_reference() {
        let company = Pubkey::new_unique();
        let record = EmployeeAccount {
            beneficiary: Pubkey::new_unique(),
            start_time: 0,
            end_time: 1000,
            cliff_time: 100,
            vesting_account: company,
            total_amount: 1000,
            total_withdrawn: 0,
            name: "alice".to_string(),
            bump: 254,
        };
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();

        let head = EmployeeHead::peek(&data).unwrap();
        assert_eq!(head.vesting_account(), company);
        assert_eq!(head.beneficiary, record.beneficiary.to_bytes());
        assert_eq!(&data[64..96], company.as_ref());
    }

    #[test]
    fn peek_refuses_short_data() {
        assert!(EmployeeHead::peek(&[0u8; 40]).is_none());
    }
}
