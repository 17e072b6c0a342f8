use anchor_lang::prelude::*;

use crate::state::VestingSchedule;

pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let st = &ctx.accounts.schedule_state;
    let now = Clock::get()?.unix_timestamp;

    let releasable_total = st.releasable_total(now)?;
    let claimable = st.claimable(now)?;

    emit!(VestingQuote {
        beneficiary: st.beneficiary,
        releasable_total,
        total_claimed: st.total_claimed,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [b"schedule", schedule_state.owner.as_ref(), schedule_state.mint.as_ref()],
        bump
    )]
    pub schedule_state: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub releasable_total: u64,
    pub total_claimed: u64,
    pub claimable: u64,
}
