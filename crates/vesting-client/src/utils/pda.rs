//! Program address derivation for the three account families.

use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_SEED, TREASURY_SEED};
use crate::utils::input::CompanyName;

/// Derive a program address and its bump from ordered seeds.
///
/// Pure; identical inputs always give the identical address. Each seed must
/// be at most 32 bytes, which the typed helpers below guarantee.
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> (Pubkey, u8) {
    Pubkey::find_program_address(seeds, program_id)
}

pub fn company_address(program_id: &Pubkey, company: &CompanyName) -> (Pubkey, u8) {
    derive_address(program_id, &[company.as_bytes()])
}

pub fn treasury_address(program_id: &Pubkey, company: &CompanyName) -> (Pubkey, u8) {
    derive_address(program_id, &[TREASURY_SEED, company.as_bytes()])
}

pub fn employee_address(
    program_id: &Pubkey,
    beneficiary: &Pubkey,
    company_account: &Pubkey,
) -> (Pubkey, u8) {
    derive_address(
        program_id,
        &[EMPLOYEE_SEED, beneficiary.as_ref(), company_account.as_ref()],
    )
}

/// Associated token account of `owner` for `mint` under `token_program`.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[owner.as_ref(), token_program.as_ref(), mint.as_ref()];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}
