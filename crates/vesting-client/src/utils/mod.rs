pub mod input;
pub mod pda;
pub mod vesting_math;
