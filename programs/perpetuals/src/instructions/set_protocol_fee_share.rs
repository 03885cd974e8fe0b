use anchor_lang::prelude::*;

use crate::{
    constants::{MULTISIG_SEED, PROTOCOL_CONFIG_SEED},
    helpers::sign_admin_instruction,
    state::{AdminInstruction, Approval, Multisig, ProtocolConfig},
};

pub fn handler(ctx: Context<SetProtocolFeeShare>, protocol_fee_share_bps: u16) -> Result<u8> {
    let now = ctx.accounts.protocol_config.get_time()?;
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &AdminInstruction::SetProtocolFeeShare {
            protocol_fee_share_bps,
        },
        &[ctx.accounts.protocol_config.key()],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    ctx.accounts.protocol_config.protocol_fee_share_bps = protocol_fee_share_bps;
    Ok(0)
}

#[derive(Accounts)]
pub struct SetProtocolFeeShare<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [MULTISIG_SEED],
        bump = multisig.bump,
    )]
    pub multisig: Account<'info, Multisig>,
    #[account(
        mut,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
}
