use anchor_lang::prelude::*;

use crate::{
    constants::{MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED},
    events::PoolRemoved,
    helpers::sign_admin_instruction,
    state::{AdminInstruction, Approval, Multisig, Pool, ProtocolConfig},
};

pub fn handler(ctx: Context<RemovePool>) -> Result<u8> {
    ctx.accounts.pool.require_empty()?;

    let pool_key = ctx.accounts.pool.key();
    let now = ctx.accounts.protocol_config.get_time()?;
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &AdminInstruction::RemovePool,
        &[pool_key],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    ctx.accounts.protocol_config.unregister_pool(&pool_key)?;
    emit!(PoolRemoved {
        pool: pool_key,
        name: ctx.accounts.pool.name.clone(),
    });
    ctx.accounts
        .pool
        .close(ctx.accounts.admin.to_account_info())?;

    Ok(0)
}

#[derive(Accounts)]
pub struct RemovePool<'info> {
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
    #[account(
        mut,
        seeds = [POOL_SEED, pool.name.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
