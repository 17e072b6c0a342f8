use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingStatus};

pub fn kill_vesting(ctx: Context<KillVesting>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let schedule_state_ai = ctx.accounts.schedule_state.to_account_info();
    let schedule_state_bump = ctx.bumps.schedule_state;

    let st = &ctx.accounts.schedule_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    require!(
        st.status != VestingStatus::Killed,
        VestingError::InvalidState
    );

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_destination.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_destination.owner,
        ctx.accounts.owner.key(),
        VestingError::InvalidTokenAccount
    );

    // Drain the entire custody. A zero-balance drain still goes through the
    // token program; transferring 0 is not an error.
    let amount = ctx.accounts.vault.amount;

    let owner_key = st.owner;
    let mint_key = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"schedule",
        owner_key.as_ref(),
        mint_key.as_ref(),
        &[schedule_state_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_destination.to_account_info(),
                authority: schedule_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    // Terminal; total_funded/total_claimed bookkeeping is left untouched.
    let st = &mut ctx.accounts.schedule_state;
    st.status = VestingStatus::Killed;

    emit!(VestingKilled {
        owner: st.owner,
        amount_reclaimed: amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct KillVesting<'info> {
    #[account(
        mut,
        seeds = [b"schedule", schedule_state.owner.as_ref(), schedule_state.mint.as_ref()],
        bump
    )]
    pub schedule_state: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", schedule_state.key().as_ref()],
        bump,
        constraint = vault.mint == schedule_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingKilled {
    pub owner: Pubkey,
    pub amount_reclaimed: u64,
}
