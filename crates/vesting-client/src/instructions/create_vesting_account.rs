use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Discriminator, InstructionData};

use crate::config::VestingConfig;
use crate::utils::input::CompanyName;
use crate::utils::pda::{company_address, treasury_address};

/// Register a company and open its treasury. Fails on-chain if the name is
/// already taken.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateVestingAccount {
    pub company_name: String,
}

impl Discriminator for CreateVestingAccount {
    const DISCRIMINATOR: &'static [u8] = &[129, 178, 2, 13, 217, 172, 230, 218];
}

impl InstructionData for CreateVestingAccount {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateVestingAccountAccounts {
    pub signer: Pubkey,
    pub vesting_account: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    pub system_program: Pubkey,
    pub token_program: Pubkey,
}

impl CreateVestingAccountAccounts {
    pub fn resolve(config: &VestingConfig, signer: &Pubkey, mint: &Pubkey, company: &CompanyName) -> Self {
        let (vesting_account, _) = company_address(&config.program_id, company);
        let (treasury_token_account, _) = treasury_address(&config.program_id, company);
        Self {
            signer: *signer,
            vesting_account,
            mint: *mint,
            treasury_token_account,
            system_program: anchor_lang::system_program::ID,
            token_program: config.token_program,
        }
    }
}

impl ToAccountMetas for CreateVestingAccountAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.signer, true),
            AccountMeta::new(self.vesting_account, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.treasury_token_account, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

pub fn create_vesting_account(
    config: &VestingConfig,
    signer: &Pubkey,
    mint: &Pubkey,
    company: &CompanyName,
) -> Instruction {
    let accounts = CreateVestingAccountAccounts::resolve(config, signer, mint, company);
    Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: CreateVestingAccount {
            company_name: company.as_str().to_string(),
        }
        .data(),
    }
}
