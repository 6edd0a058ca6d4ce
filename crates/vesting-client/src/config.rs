use anchor_lang::prelude::*;

/// Program and token program addresses a client talks to. Passed explicitly
/// to everything that needs it; there is no process-wide connection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingConfig {
    pub program_id: Pubkey,
    /// Token program owning the treasury and employee token accounts.
    pub token_program: Pubkey,
}

impl Default for VestingConfig {
    fn default() -> Self {
        Self {
            program_id: crate::ID,
            token_program: anchor_spl::token::ID,
        }
    }
}

impl VestingConfig {
    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self {
            program_id,
            ..Self::default()
        }
    }

    /// Use Token-2022 (or another token program) for treasury transfers.
    pub fn token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_declared_program() {
        let config = VestingConfig::default();
        assert_eq!(config.program_id, crate::ID);
        assert_eq!(config.token_program, anchor_spl::token::ID);
    }

    #[test]
    fn overrides() {
        let program = Pubkey::new_unique();
        let token = Pubkey::new_unique();
        let config = VestingConfig::with_program_id(program).token_program(token);
        assert_eq!(config.program_id, program);
        assert_eq!(config.token_program, token);
    }
}
