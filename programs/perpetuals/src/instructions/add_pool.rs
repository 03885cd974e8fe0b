use anchor_lang::prelude::*;

use crate::{
    constants::{MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED},
    error::ErrorCode,
    events::PoolAdded,
    helpers::{
        accounts::{create_pda_account, write_account},
        sign_admin_instruction,
    },
    state::{AdminInstruction, Approval, Multisig, Pool, ProtocolConfig},
};

pub fn handler(ctx: Context<AddPool>, name: String) -> Result<u8> {
    // seeds longer than 32 bytes can not be derived
    Pool::validate_name(&name)?;
    let (pool_key, bump) = Pubkey::find_program_address(&[POOL_SEED, name.as_bytes()], &crate::ID);
    require_keys_eq!(
        ctx.accounts.pool.key(),
        pool_key,
        anchor_lang::error::ErrorCode::ConstraintSeeds
    );
    if !ctx.accounts.pool.data_is_empty() {
        msg!("Error: pool {} already exists", name);
        return err!(ErrorCode::DuplicateName);
    }
    ctx.accounts.protocol_config.check_new_pool(&pool_key)?;

    let now = ctx.accounts.protocol_config.get_time()?;
    let instruction = AdminInstruction::AddPool { name: name.clone() };
    let approval = sign_admin_instruction(
        &mut ctx.accounts.multisig,
        &ctx.accounts.admin.key(),
        &instruction,
        &[pool_key],
        now,
    )?;
    if approval != Approval::Ready {
        return Ok(approval.signatures_left());
    }

    let pool_info = ctx.accounts.pool.to_account_info();
    create_pda_account(
        ctx.accounts.admin.to_account_info(),
        pool_info.clone(),
        ctx.accounts.system_program.to_account_info(),
        8 + Pool::INIT_SPACE,
        &[POOL_SEED, name.as_bytes(), &[bump]],
    )?;
    let pool = Pool {
        name: name.clone(),
        custodies: Vec::new(),
        inception_time: now,
        bump,
    };
    write_account(&pool_info, &pool)?;
    ctx.accounts.protocol_config.register_pool(pool_key)?;

    emit!(PoolAdded {
        pool: pool_key,
        name,
    });

    Ok(0)
}

#[derive(Accounts)]
pub struct AddPool<'info> {
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
    /// CHECK: pool PDA for the requested name, created once the quorum is reached.
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}
