use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Discriminator, InstructionData};

use crate::config::VestingConfig;
use crate::utils::input::EmployeeSchedule;
use crate::utils::pda::employee_address;

/// Enroll one beneficiary under a company. Only the company owner may sign.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateEmployeeAccount {
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    pub total_amount: u64,
    pub total_withdrawn: u64,
    pub name: String,
}

impl Discriminator for CreateEmployeeAccount {
    const DISCRIMINATOR: &'static [u8] = &[94, 118, 255, 19, 171, 159, 58, 107];
}

impl InstructionData for CreateEmployeeAccount {}

impl From<&EmployeeSchedule> for CreateEmployeeAccount {
    fn from(schedule: &EmployeeSchedule) -> Self {
        Self {
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            cliff_time: schedule.cliff_time,
            total_amount: schedule.total_amount,
            total_withdrawn: 0,
            name: schedule.name.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateEmployeeAccountAccounts {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub employee_account: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for CreateEmployeeAccountAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.owner, true),
            AccountMeta::new_readonly(self.beneficiary, false),
            AccountMeta::new_readonly(self.vesting_account, false),
            AccountMeta::new(self.employee_account, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub fn create_employee_account(
    config: &VestingConfig,
    owner: &Pubkey,
    vesting_account: &Pubkey,
    schedule: &EmployeeSchedule,
) -> Instruction {
    let (employee_account, _) =
        employee_address(&config.program_id, &schedule.beneficiary, vesting_account);
    let accounts = CreateEmployeeAccountAccounts {
        owner: *owner,
        beneficiary: schedule.beneficiary,
        vesting_account: *vesting_account,
        employee_account,
        system_program: anchor_lang::system_program::ID,
    };
    Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: CreateEmployeeAccount::from(schedule).data(),
    }
}
