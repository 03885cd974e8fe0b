use anchor_lang::prelude::*;

use crate::{
    constants::{MULTISIG_SEED, PROTOCOL_CONFIG_SEED},
    events::AdminInstructionCancelled,
    state::{Multisig, ProtocolConfig},
};

pub fn handler(ctx: Context<CancelAdminInstruction>) -> Result<()> {
    let now = ctx.accounts.protocol_config.get_time()?;
    let signer = ctx.accounts.admin.key();
    let cancelled = ctx.accounts.multisig.cancel(&signer, now)?;

    msg!("{:?} cancelled", cancelled.operation);
    emit!(AdminInstructionCancelled {
        operation: cancelled.operation,
        signer,
        proposed_at: cancelled.proposed_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelAdminInstruction<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [MULTISIG_SEED],
        bump = multisig.bump,
    )]
    pub multisig: Account<'info, Multisig>,
    #[account(
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
}
