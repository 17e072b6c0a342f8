use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingStatus};

pub fn change_receiver(ctx: Context<ChangeReceiver>, new_receiver: Pubkey) -> Result<()> {
    require!(new_receiver != Pubkey::default(), VestingError::InvalidPubkey);

    let schedule_key = ctx.accounts.schedule_state.key();
    let st = &mut ctx.accounts.schedule_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    require!(
        st.status != VestingStatus::Killed,
        VestingError::InvalidState
    );

    // The receiver must be able to sign claims: block the program and its
    // known PDAs.
    require!(new_receiver != crate::ID, VestingError::InvalidConfig);
    require!(new_receiver != schedule_key, VestingError::InvalidConfig);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", schedule_key.as_ref()], &crate::ID);
    require!(new_receiver != vault_pda, VestingError::InvalidConfig);

    // Pure reassignment: total_claimed belongs to the schedule, so the new
    // receiver inherits the curve net of everything already claimed.
    let old = st.beneficiary;
    st.beneficiary = new_receiver;

    emit!(ReceiverChanged {
        owner: st.owner,
        old_receiver: old,
        new_receiver,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ChangeReceiver<'info> {
    #[account(
        mut,
        seeds = [b"schedule", schedule_state.owner.as_ref(), schedule_state.mint.as_ref()],
        bump
    )]
    pub schedule_state: Account<'info, VestingSchedule>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ReceiverChanged {
    pub owner: Pubkey,
    pub old_receiver: Pubkey,
    pub new_receiver: Pubkey,
}
