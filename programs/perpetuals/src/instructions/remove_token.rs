use anchor_lang::prelude::*;

use crate::{
    constants::{CUSTODY_SEED, MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED},
    events::TokenRemoved,
    helpers::sign_admin_instruction,
    state::{AdminInstruction, Approval, Custody, Multisig, Pool, ProtocolConfig},
};

pub fn handler(ctx: Context<RemoveToken>) -> Result<u8> {
    let pool_key = ctx.accounts.pool.key();
    let custody_key = ctx.accounts.custody.key();
    ctx.accounts.pool.custody_index(&custody_key)?;

    let now = ctx.accounts.protocol_config.get_time()?;
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &AdminInstruction::RemoveToken,
        &[pool_key, custody_key],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    ctx.accounts.pool.remove_custody(&custody_key)?;
    emit!(TokenRemoved {
        pool: pool_key,
        custody: custody_key,
        mint: ctx.accounts.custody.mint,
    });
    ctx.accounts
        .custody
        .close(ctx.accounts.admin.to_account_info())?;

    Ok(0)
}

#[derive(Accounts)]
pub struct RemoveToken<'info> {
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
    #[account(
        mut,
        seeds = [POOL_SEED, pool.name.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        has_one = pool,
        seeds = [CUSTODY_SEED, pool.key().as_ref(), custody.mint.as_ref()],
        bump = custody.bump,
    )]
    pub custody: Account<'info, Custody>,
}
