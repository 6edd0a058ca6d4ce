//! Narrow interfaces to the network. The client owns implementations of
//! these; nothing in the crate holds a connection of its own.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;

use crate::classify::FailureReport;

/// Server-side filter for a bulk program-account scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountFilter {
    /// Raw data at `offset` equals `bytes`.
    Memcmp { offset: usize, bytes: Vec<u8> },
}

impl AccountFilter {
    pub fn memcmp_pubkey(offset: usize, key: &Pubkey) -> Self {
        AccountFilter::Memcmp {
            offset,
            bytes: key.to_bytes().to_vec(),
        }
    }

    /// Evaluate the filter locally against raw account data.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            AccountFilter::Memcmp { offset, bytes } => offset
                .checked_add(bytes.len())
                .and_then(|end| data.get(*offset..end))
                .is_some_and(|window| window == bytes.as_slice()),
        }
    }
}

/// An account returned by a bulk scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedAccount {
    pub address: Pubkey,
    pub data: Vec<u8>,
}

pub trait AccountReader {
    /// Raw data at `address`, or `None` when no account exists there.
    fn fetch_account(&self, address: &Pubkey) -> std::result::Result<Option<Vec<u8>>, FailureReport>;

    /// Every account owned by `program_id` passing all `filters`.
    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> std::result::Result<Vec<KeyedAccount>, FailureReport>;
}

pub trait TransactionSender {
    /// Sign and submit `instructions` in one transaction, returning its
    /// signature.
    fn send(&self, instructions: Vec<Instruction>) -> std::result::Result<String, FailureReport>;
}
