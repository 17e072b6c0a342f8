use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingStatus};

pub fn fund_vesting(ctx: Context<FundVesting>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    // Capture AccountInfos/keys before taking mutable borrows.
    let schedule_state_ai = ctx.accounts.schedule_state.to_account_info();
    let schedule_state_bump = ctx.bumps.schedule_state;
    let schedule_key = ctx.accounts.schedule_state.key();

    let st = &ctx.accounts.schedule_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    require!(
        st.status == VestingStatus::Unfunded,
        VestingError::InvalidState
    );

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        VestingError::InvalidTokenAccount
    );

    // Admission: the funded amount must exactly equal the allowance the owner
    // delegated to the schedule PDA. Less or more both fail.
    match ctx.accounts.owner_token_account.delegate {
        COption::Some(delegate) if delegate == schedule_key => {}
        _ => return Err(VestingError::AllowanceMismatch.into()),
    }
    require!(
        ctx.accounts.owner_token_account.delegated_amount == amount,
        VestingError::AllowanceMismatch
    );

    // Pull-transfer into the vault, signed by the schedule PDA as delegate.
    // An insufficient owner balance aborts inside the token program.
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
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: schedule_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    let st = &mut ctx.accounts.schedule_state;
    st.total_funded = amount;
    st.status = VestingStatus::Funded;

    emit!(VestingFunded {
        owner: st.owner,
        total_tokens: amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundVesting<'info> {
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
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingFunded {
    pub owner: Pubkey,
    pub total_tokens: u64,
}
