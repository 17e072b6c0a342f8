use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingStatus};

pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let schedule_state_ai = ctx.accounts.schedule_state.to_account_info();
    let schedule_state_bump = ctx.bumps.schedule_state;

    let st = &ctx.accounts.schedule_state;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        st.beneficiary,
        VestingError::UnauthorizedBeneficiary
    );
    require!(
        st.status == VestingStatus::Funded,
        VestingError::InvalidState
    );

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        st.beneficiary,
        VestingError::InvalidTokenAccount
    );

    // Fresh curve evaluation from the current timestamp; a repeat claim at the
    // same instant finds nothing left.
    let now = Clock::get()?.unix_timestamp;
    let amount = st.claimable(now)?;
    require!(amount > 0, VestingError::NothingToClaim);

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

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
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let st = &mut ctx.accounts.schedule_state;
    st.total_claimed = st
        .total_claimed
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        beneficiary: st.beneficiary,
        tokens_claimed: amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
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
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub tokens_claimed: u64,
}
