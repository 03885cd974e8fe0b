use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{
        CUSTODY_SEED, MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED, TRANSFER_AUTHORITY_SEED,
    },
    error::ErrorCode,
    events::FeesWithdrawn,
    helpers::sign_admin_instruction,
    state::{AdminInstruction, Approval, Custody, Multisig, Pool, ProtocolConfig},
};

pub fn handler(ctx: Context<WithdrawFees>, amount: u64) -> Result<u8> {
    let custody_key = ctx.accounts.custody.key();
    let receiver_key = ctx.accounts.receiving_token_account.key();
    if amount > ctx.accounts.custody.assets.protocol_fees {
        msg!(
            "Error: withdraw {} of {} protocol fees",
            amount,
            ctx.accounts.custody.assets.protocol_fees
        );
        return err!(ErrorCode::InsufficientProtocolFees);
    }

    let now = ctx.accounts.protocol_config.get_time()?;
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &AdminInstruction::WithdrawFees { amount },
        &[custody_key, receiver_key],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    ctx.accounts.custody.withdraw_protocol_fees(amount)?;

    let transfer_authority_bump = ctx.accounts.protocol_config.transfer_authority_bump;
    let signer_seed_group: &[&[u8]] = &[TRANSFER_AUTHORITY_SEED, &[transfer_authority_bump]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.custody_token_account.to_account_info(),
        to: ctx.accounts.receiving_token_account.to_account_info(),
        authority: ctx.accounts.transfer_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount,
    )?;

    emit!(FeesWithdrawn {
        custody: custody_key,
        receiver: receiver_key,
        amount,
        protocol_fees_left: ctx.accounts.custody.assets.protocol_fees,
    });

    Ok(0)
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
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
    /// CHECK: data-less PDA, authority of the custody token account.
    #[account(
        seeds = [TRANSFER_AUTHORITY_SEED],
        bump = protocol_config.transfer_authority_bump,
    )]
    pub transfer_authority: UncheckedAccount<'info>,
    #[account(
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
    #[account(mut, address = custody.token_account @ ErrorCode::InvalidTokenAccount)]
    pub custody_token_account: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = receiving_token_account.mint == custody.mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiving_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
