use anchor_lang::prelude::*;

use crate::{
    constants::{MULTISIG_SEED, PROTOCOL_CONFIG_SEED},
    helpers::sign_admin_instruction,
    state::{AdminInstruction, Approval, Multisig, ProtocolConfig},
};

/// Replaces the quorum itself. Pass the current signers to only change the
/// threshold.
pub fn handler(
    ctx: Context<SetAdminSigners>,
    signers: Vec<Pubkey>,
    min_signatures: u8,
) -> Result<u8> {
    let now = ctx.accounts.protocol_config.get_time()?;
    let multisig_key = ctx.accounts.multisig.key();
    let instruction = AdminInstruction::SetAdminSigners {
        signers: signers.clone(),
        min_signatures,
    };
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &instruction,
        &[multisig_key],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    ctx.accounts.multisig.set_signers(&signers, min_signatures)?;
    msg!(
        "Admin signers set to {} of {}",
        min_signatures,
        signers.len()
    );
    Ok(0)
}

#[derive(Accounts)]
pub struct SetAdminSigners<'info> {
    #[account(mut)]
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
