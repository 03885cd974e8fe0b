use anchor_lang::{prelude::*, solana_program::bpf_loader_upgradeable};

use crate::{
    constants::{MULTISIG_SEED, PROTOCOL_CONFIG_SEED, TRANSFER_AUTHORITY_SEED},
    state::{validate_protocol_fee_share, Multisig, Permissions, ProtocolConfig},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitParams {
    pub admin_signers: Vec<Pubkey>,
    pub min_signatures: u8,
    pub permissions: Permissions,
    pub protocol_fee_share_bps: u16,
}

pub fn handler(ctx: Context<Init>, params: InitParams) -> Result<()> {
    validate_protocol_fee_share(params.protocol_fee_share_bps)?;

    let multisig = &mut ctx.accounts.multisig;
    multisig.set_signers(&params.admin_signers, params.min_signatures)?;
    multisig.bump = ctx.bumps.multisig;

    let config = &mut ctx.accounts.protocol_config;
    config.permissions = params.permissions;
    config.protocol_fee_share_bps = params.protocol_fee_share_bps;
    config.pools = Vec::new();
    config.test_time = 0;
    config.transfer_authority_bump = ctx.bumps.transfer_authority;
    config.bump = ctx.bumps.protocol_config;
    config.inception_time = config.get_time()?;

    msg!(
        "Initialized with {} of {} admin signers",
        params.min_signatures,
        params.admin_signers.len()
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Init<'info> {
    #[account(mut)]
    pub upgrade_authority: Signer<'info>,
    #[account(
        init,
        payer = upgrade_authority,
        seeds = [MULTISIG_SEED],
        bump,
        space = 8 + Multisig::INIT_SPACE,
    )]
    pub multisig: Account<'info, Multisig>,
    /// CHECK: data-less PDA that owns every custody token account.
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump)]
    pub transfer_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = upgrade_authority,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump,
        space = 8 + ProtocolConfig::INIT_SPACE,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
    // only the upgradeable loader can own the program data address of this program
    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::ID,
        constraint = perpetuals_program_data.upgrade_authority_address == Some(upgrade_authority.key())
    )]
    pub perpetuals_program_data: Account<'info, ProgramData>,
    pub system_program: Program<'info, System>,
}
