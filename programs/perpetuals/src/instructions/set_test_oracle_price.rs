use anchor_lang::prelude::*;

use crate::{
    constants::{CUSTODY_SEED, MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED, TEST_ORACLE_SEED},
    error::ErrorCode,
    helpers::require_admin_signer,
    state::{Custody, Multisig, Pool, ProtocolConfig, TestOracle},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct SetTestOraclePriceParams {
    pub price: u64,
    pub expo: i32,
    pub conf: u64,
    pub publish_time: i64,
}

pub fn handler(ctx: Context<SetTestOraclePrice>, params: SetTestOraclePriceParams) -> Result<()> {
    require!(cfg!(feature = "test"), ErrorCode::InvalidEnvironment);
    require_admin_signer(&ctx.accounts.multisig, &ctx.accounts.admin.key())?;

    let oracle = &mut ctx.accounts.oracle_account;
    oracle.price = params.price;
    oracle.expo = params.expo;
    oracle.conf = params.conf;
    oracle.publish_time = params.publish_time;
    oracle.bump = ctx.bumps.oracle_account;

    Ok(())
}

#[derive(Accounts)]
pub struct SetTestOraclePrice<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
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
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [TEST_ORACLE_SEED, pool.key().as_ref(), custody.mint.as_ref()],
        bump,
        space = 8 + TestOracle::INIT_SPACE,
    )]
    pub oracle_account: Account<'info, TestOracle>,
    pub system_program: Program<'info, System>,
}
