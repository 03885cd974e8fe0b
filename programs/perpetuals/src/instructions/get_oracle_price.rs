use anchor_lang::prelude::*;

use crate::{
    constants::{CUSTODY_SEED, POOL_SEED, PRICE_DECIMALS, PROTOCOL_CONFIG_SEED},
    error::ErrorCode,
    state::{Custody, OraclePrice, Pool, ProtocolConfig},
};

/// Current validated price of the custody asset, scaled to `PRICE_DECIMALS`.
pub fn handler(ctx: Context<GetOraclePrice>) -> Result<OraclePrice> {
    let now = ctx.accounts.protocol_config.get_time()?;
    let price = ctx
        .accounts
        .custody
        .oracle
        .get_price(&ctx.accounts.custody_oracle_account.to_account_info(), now)?;
    price.scale_to_exponent(-(PRICE_DECIMALS as i32))
}

#[derive(Accounts)]
pub struct GetOraclePrice<'info> {
    #[account(
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
    #[account(
        seeds = [POOL_SEED, pool.name.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        has_one = pool,
        seeds = [CUSTODY_SEED, pool.key().as_ref(), custody.mint.as_ref()],
        bump = custody.bump,
    )]
    pub custody: Account<'info, Custody>,
    /// CHECK: price source, decoded according to the custody oracle type.
    #[account(
        constraint = custody_oracle_account.key() == custody.oracle.oracle_account @ ErrorCode::InvalidOracle
    )]
    pub custody_oracle_account: UncheckedAccount<'info>,
}
