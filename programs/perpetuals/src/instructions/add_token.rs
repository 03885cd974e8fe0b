use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{
    constants::{
        CUSTODY_SEED, MAX_POOL_TOKENS, MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED,
        TRANSFER_AUTHORITY_SEED,
    },
    error::ErrorCode,
    events::TokenAdded,
    helpers::{
        accounts::{create_pda_account, write_account},
        sign_admin_instruction,
    },
    state::{AdminInstruction, Approval, Custody, CustodyConfig, Multisig, Pool, ProtocolConfig},
};

pub fn handler(ctx: Context<AddToken>, config: CustodyConfig) -> Result<u8> {
    let pool_key = ctx.accounts.pool.key();
    let custody_key = ctx.accounts.custody.key();
    let mint_key = ctx.accounts.custody_token_mint.key();
    let token_account_key = ctx.accounts.custody_token_account.key();

    if !ctx.accounts.custody.data_is_empty() || ctx.accounts.pool.custodies.contains(&custody_key)
    {
        msg!("Error: {} is already in pool {}", mint_key, ctx.accounts.pool.name);
        return err!(ErrorCode::DuplicateAsset);
    }
    require!(
        ctx.accounts.pool.custodies.len() < MAX_POOL_TOKENS,
        ErrorCode::PoolFull
    );

    let now = ctx.accounts.protocol_config.get_time()?;
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &AdminInstruction::AddToken(config),
        &[pool_key, custody_key, mint_key, token_account_key],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    let bump = ctx.bumps.custody;
    let custody = Custody::new(
        pool_key,
        mint_key,
        token_account_key,
        ctx.accounts.custody_token_mint.decimals,
        &config,
        bump,
    )?;
    let custody_info = ctx.accounts.custody.to_account_info();
    create_pda_account(
        ctx.accounts.admin.to_account_info(),
        custody_info.clone(),
        ctx.accounts.system_program.to_account_info(),
        8 + Custody::INIT_SPACE,
        &[CUSTODY_SEED, pool_key.as_ref(), mint_key.as_ref(), &[bump]],
    )?;
    write_account(&custody_info, &custody)?;
    ctx.accounts.pool.add_custody(custody_key)?;

    emit!(TokenAdded {
        pool: pool_key,
        custody: custody_key,
        mint: mint_key,
    });

    Ok(0)
}

#[derive(Accounts)]
pub struct AddToken<'info> {
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
    /// CHECK: data-less PDA.
    #[account(
        seeds = [TRANSFER_AUTHORITY_SEED],
        bump = protocol_config.transfer_authority_bump,
    )]
    pub transfer_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.name.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: custody PDA, created once the quorum is reached.
    #[account(
        mut,
        seeds = [CUSTODY_SEED, pool.key().as_ref(), custody_token_mint.key().as_ref()],
        bump,
    )]
    pub custody: UncheckedAccount<'info>,
    #[account(
        constraint = custody_token_account.mint == custody_token_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = custody_token_account.owner == transfer_authority.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub custody_token_account: Account<'info, TokenAccount>,
    pub custody_token_mint: Account<'info, Mint>,
    pub system_program: Program<'info, System>,
}
