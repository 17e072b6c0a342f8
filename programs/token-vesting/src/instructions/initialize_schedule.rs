use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingStatus};

pub fn initialize_schedule(
    ctx: Context<InitializeSchedule>,
    beneficiary: Pubkey,
    start_ts: i64,
    cliff_seconds: i64,
    period_seconds: i64,
    period_count: u32,
) -> Result<()> {
    require!(start_ts > 0, VestingError::InvalidTimestamp);
    require!(cliff_seconds >= 0, VestingError::InvalidConfig);
    require!(period_seconds > 0, VestingError::InvalidConfig);
    require!(period_count > 0, VestingError::InvalidConfig);
    require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);

    // The beneficiary must be able to sign claims: block the program and its
    // known PDAs.
    require!(beneficiary != crate::ID, VestingError::InvalidConfig);
    require!(
        beneficiary != ctx.accounts.schedule_state.key(),
        VestingError::InvalidConfig
    );
    require!(
        beneficiary != ctx.accounts.vault.key(),
        VestingError::InvalidConfig
    );

    // The cliff gate and the full schedule end must fit in i64 time.
    let total_seconds = period_seconds
        .checked_mul(period_count as i64)
        .ok_or(VestingError::MathOverflow)?;
    start_ts
        .checked_add(cliff_seconds)
        .ok_or(VestingError::MathOverflow)?;
    start_ts
        .checked_add(total_seconds)
        .ok_or(VestingError::MathOverflow)?;

    let st = &mut ctx.accounts.schedule_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.beneficiary = beneficiary;
    st.start_ts = start_ts;
    st.cliff_seconds = cliff_seconds;
    st.period_seconds = period_seconds;
    st.period_count = period_count;
    st.total_funded = 0;
    st.total_claimed = 0;
    st.status = VestingStatus::Unfunded;

    emit!(ScheduleInitialized {
        mint: st.mint,
        owner: st.owner,
        beneficiary: st.beneficiary,
        start_ts: st.start_ts,
        cliff_seconds: st.cliff_seconds,
        period_seconds: st.period_seconds,
        period_count: st.period_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSchedule<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"schedule", owner.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub schedule_state: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = schedule_state,
        seeds = [b"vault", schedule_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub cliff_seconds: i64,
    pub period_seconds: i64,
    pub period_count: u32,
}
