use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("VesTing111111111111111111111111111111111111");

#[program]
pub mod token_vesting {
    use super::*;

    /// Create a fully parameterized schedule and its token vault.
    pub fn initialize_schedule(
        ctx: Context<InitializeSchedule>,
        beneficiary: Pubkey,
        start_ts: i64,
        cliff_seconds: i64,
        period_seconds: i64,
        period_count: u32,
    ) -> Result<()> {
        instructions::initialize_schedule::initialize_schedule(
            ctx,
            beneficiary,
            start_ts,
            cliff_seconds,
            period_seconds,
            period_count,
        )
    }

    /// One-shot funding: pulls exactly the delegated allowance into the vault.
    pub fn fund_vesting(ctx: Context<FundVesting>, amount: u64) -> Result<()> {
        instructions::fund_vesting::fund_vesting(ctx, amount)
    }

    /// Release everything vested so far, net of prior claims, to the beneficiary.
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens::claim_tokens(ctx)
    }

    /// Point the schedule at a new beneficiary; accounting is untouched.
    pub fn change_receiver(ctx: Context<ChangeReceiver>, new_receiver: Pubkey) -> Result<()> {
        instructions::change_receiver::change_receiver(ctx, new_receiver)
    }

    /// Drain the vault back to the owner and terminate the schedule.
    pub fn kill_vesting(ctx: Context<KillVesting>) -> Result<()> {
        instructions::kill_vesting::kill_vesting(ctx)
    }

    /// Emit the current curve position without mutating state.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx)
    }
}
