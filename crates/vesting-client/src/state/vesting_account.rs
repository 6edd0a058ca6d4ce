use anchor_lang::prelude::*;

/// Company vesting account. Its address is derived from `company_name`, so
/// names are unique on-chain.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VestingAccount {
    /// Admin wallet that created the company.
    pub owner: Pubkey,
    /// Token mint distributed by this company.
    pub mint: Pubkey,
    /// Treasury token account claims are paid from.
    pub treasury_token_account: Pubkey,
    #[max_len(50)]
    pub company_name: String,
    pub treasury_bump: u8,
    pub bump: u8,
}

impl VestingAccount {
    pub fn is_owned_by(&self, wallet: &Pubkey) -> bool {
        self.owner == *wallet
    }
}
