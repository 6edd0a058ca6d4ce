use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Discriminator, InstructionData};

use crate::config::VestingConfig;
use crate::state::VestingAccount;
use crate::utils::input::CompanyName;
use crate::utils::pda::{associated_token_address, employee_address};

/// Withdraw everything currently vested and unclaimed to the beneficiary's
/// associated token account, creating it if needed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimTokens {
    pub company_name: String,
}

impl Discriminator for ClaimTokens {
    const DISCRIMINATOR: &'static [u8] = &[108, 216, 210, 231, 0, 212, 42, 64];
}

impl InstructionData for ClaimTokens {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimTokensAccounts {
    pub beneficiary: Pubkey,
    pub employee_account: Pubkey,
    pub vesting_account: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    pub employee_token_account: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for ClaimTokensAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.beneficiary, true),
            AccountMeta::new(self.employee_account, false),
            AccountMeta::new(self.vesting_account, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.treasury_token_account, false),
            AccountMeta::new(self.employee_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Mint and treasury come from the freshly fetched company account rather
/// than from user input.
pub fn claim_tokens(
    config: &VestingConfig,
    beneficiary: &Pubkey,
    company: &CompanyName,
    vesting_account: &Pubkey,
    company_account: &VestingAccount,
) -> Instruction {
    let (employee_account, _) = employee_address(&config.program_id, beneficiary, vesting_account);
    let accounts = ClaimTokensAccounts {
        beneficiary: *beneficiary,
        employee_account,
        vesting_account: *vesting_account,
        mint: company_account.mint,
        treasury_token_account: company_account.treasury_token_account,
        employee_token_account: associated_token_address(
            beneficiary,
            &company_account.mint,
            &config.token_program,
        ),
        token_program: config.token_program,
        associated_token_program: anchor_spl::associated_token::ID,
        system_program: anchor_lang::system_program::ID,
    };
    Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: ClaimTokens {
            company_name: company.as_str().to_string(),
        }
        .data(),
    }
}
