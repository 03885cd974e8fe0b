use anchor_lang::prelude::*;

use crate::{
    constants::{MULTISIG_SEED, PROTOCOL_CONFIG_SEED},
    error::ErrorCode,
    helpers::require_admin_signer,
    state::{Multisig, ProtocolConfig},
};

pub fn handler(ctx: Context<SetTestTime>, time: i64) -> Result<()> {
    require!(cfg!(feature = "test"), ErrorCode::InvalidEnvironment);
    require_admin_signer(&ctx.accounts.multisig, &ctx.accounts.admin.key())?;
    require_gte!(time, 0, ErrorCode::InvalidEnvironment);

    ctx.accounts.protocol_config.test_time = time;
    Ok(())
}

#[derive(Accounts)]
pub struct SetTestTime<'info> {
    pub admin: Signer<'info>,
    #[account(
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
