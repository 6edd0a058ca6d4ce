//! Orchestration of the admin and beneficiary flows over the pure core.
//!
//! Every call reads or sends exactly once and never retries. A read right
//! after a successful send may not observe it yet; callers re-read after a
//! short delay.

use anchor_lang::prelude::*;

use crate::classify::{classify, ErrorCategory, FailureReport};
use crate::codec::decode_maybe;
use crate::config::VestingConfig;
use crate::error::{ClientError, InputError, InvariantViolation};
use crate::instructions::{claim_tokens, create_employee_account, create_vesting_account};
use crate::registry::{list_employees_for_company, EmployeeRoster};
use crate::rpc::{AccountReader, TransactionSender};
use crate::state::{EmployeeAccount, VestingAccount};
use crate::utils::input::{parse_address, CompanyName, EmployeeInput, EmployeeSchedule};
use crate::utils::pda::{company_address, employee_address, treasury_address};
use crate::utils::vesting_math::ClaimEligibility;

/// Outcome of looking up one beneficiary's schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleLookup {
    CompanyNotFound,
    /// The company exists but has no schedule for this wallet, or the
    /// enrollment has not propagated yet.
    ScheduleNotFound { company_address: Pubkey },
    Found(Box<FoundSchedule>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundSchedule {
    pub address: Pubkey,
    pub company_address: Pubkey,
    pub company: VestingAccount,
    pub record: EmployeeAccount,
}

impl ScheduleLookup {
    pub fn found(&self) -> Option<&FoundSchedule> {
        match self {
            ScheduleLookup::Found(found) => Some(found),
            _ => None,
        }
    }
}

impl FoundSchedule {
    pub fn eligibility(&self, now: i64) -> std::result::Result<ClaimEligibility, InvariantViolation> {
        ClaimEligibility::of(&self.record, now)
    }
}

/// Addresses created by a successful company registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedCompany {
    pub signature: String,
    pub vesting_account: Pubkey,
    pub treasury_token_account: Pubkey,
}

pub struct VestingClient<R, S> {
    config: VestingConfig,
    reader: R,
    sender: S,
}

impl<R: AccountReader, S: TransactionSender> VestingClient<R, S> {
    pub fn new(config: VestingConfig, reader: R, sender: S) -> Self {
        Self {
            config,
            reader,
            sender,
        }
    }

    pub fn config(&self) -> &VestingConfig {
        &self.config
    }

    pub fn find_company(
        &self,
        company_name: &str,
    ) -> std::result::Result<Option<(Pubkey, VestingAccount)>, ClientError> {
        let company = CompanyName::parse(company_name)?;
        let (address, _) = company_address(&self.config.program_id, &company);
        Ok(self.fetch::<VestingAccount>(&address)?.map(|account| (address, account)))
    }

    /// Whether `wallet` owns the company, or `None` if it does not exist.
    pub fn check_owner(
        &self,
        company_name: &str,
        wallet: &Pubkey,
    ) -> std::result::Result<Option<bool>, ClientError> {
        Ok(self
            .find_company(company_name)?
            .map(|(_, account)| account.is_owned_by(wallet)))
    }

    pub fn find_schedule(
        &self,
        company_name: &str,
        beneficiary: &Pubkey,
    ) -> std::result::Result<ScheduleLookup, ClientError> {
        let Some((company_address, company)) = self.find_company(company_name)? else {
            return Ok(ScheduleLookup::CompanyNotFound);
        };
        let (address, _) = employee_address(&self.config.program_id, beneficiary, &company_address);
        match self.fetch::<EmployeeAccount>(&address)? {
            None => Ok(ScheduleLookup::ScheduleNotFound { company_address }),
            Some(record) => Ok(ScheduleLookup::Found(Box::new(FoundSchedule {
                address,
                company_address,
                company,
                record,
            }))),
        }
    }

    pub fn list_employees(&self, company_name: &str) -> std::result::Result<EmployeeRoster, ClientError> {
        let company = CompanyName::parse(company_name)?;
        let (address, _) = company_address(&self.config.program_id, &company);
        list_employees_for_company(&self.reader, &self.config.program_id, &address)
            .map_err(|report| self.fail(report))
    }

    pub fn create_company(
        &self,
        signer: &Pubkey,
        company_name: &str,
        mint: &str,
    ) -> std::result::Result<CreatedCompany, ClientError> {
        let company = CompanyName::parse(company_name)?;
        let mint = parse_address(mint)?;

        let ix = create_vesting_account(&self.config, signer, &mint, &company);
        let signature = self.send(vec![ix])?;
        Ok(CreatedCompany {
            signature,
            vesting_account: company_address(&self.config.program_id, &company).0,
            treasury_token_account: treasury_address(&self.config.program_id, &company).0,
        })
    }

    /// Enroll every row in a single transaction. All rows are validated
    /// before anything is sent.
    pub fn enroll_employees(
        &self,
        owner: &Pubkey,
        company_name: &str,
        rows: &[EmployeeInput],
    ) -> std::result::Result<String, ClientError> {
        let company = CompanyName::parse(company_name)?;
        if rows.is_empty() {
            return Err(InputError::NoEmployees.into());
        }
        let schedules = rows
            .iter()
            .map(EmployeeInput::validate)
            .collect::<std::result::Result<Vec<EmployeeSchedule>, _>>()?;

        let (vesting_account, _) = company_address(&self.config.program_id, &company);
        let instructions = schedules
            .iter()
            .map(|schedule| create_employee_account(&self.config, owner, &vesting_account, schedule))
            .collect();
        self.send(instructions)
    }

    /// Claim whatever the program considers withdrawable now. The company
    /// account is re-read so mint and treasury are never taken from input.
    pub fn claim(&self, beneficiary: &Pubkey, company_name: &str) -> std::result::Result<String, ClientError> {
        let company = CompanyName::parse(company_name)?;
        let (vesting_account, _) = company_address(&self.config.program_id, &company);
        let Some(account) = self.fetch::<VestingAccount>(&vesting_account)? else {
            return Err(ErrorCategory::AccountNotFound.into());
        };

        let ix = claim_tokens(&self.config, beneficiary, &company, &vesting_account, &account);
        self.send(vec![ix])
    }

    fn fetch<T>(&self, address: &Pubkey) -> std::result::Result<Option<T>, ClientError>
    where
        T: AnchorDeserialize + anchor_lang::Discriminator,
    {
        let data = self
            .reader
            .fetch_account(address)
            .map_err(|report| self.fail(report))?;
        Ok(decode_maybe(data.as_deref())?)
    }

    fn send(
        &self,
        instructions: Vec<anchor_lang::solana_program::instruction::Instruction>,
    ) -> std::result::Result<String, ClientError> {
        self.sender
            .send(instructions)
            .map_err(|report| self.fail(report))
    }

    fn fail(&self, report: FailureReport) -> ClientError {
        let category = classify(&report);
        msg!("request failed: {:?}", category);
        ClientError::Failed(category)
    }
}
