use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("Gswa2NzGEuUeM5MekCTJ9rLyzsocW1FENHue5f3uiDr7");

#[program]
pub mod perpetuals {
    use super::*;

    pub fn init(ctx: Context<Init>, params: InitParams) -> Result<()> {
        instructions::init::handler(ctx, params)
    }

    pub fn add_pool(ctx: Context<AddPool>, name: String) -> Result<u8> {
        instructions::add_pool::handler(ctx, name)
    }

    pub fn remove_pool(ctx: Context<RemovePool>) -> Result<u8> {
        instructions::remove_pool::handler(ctx)
    }

    pub fn add_token(ctx: Context<AddToken>, config: CustodyConfig) -> Result<u8> {
        instructions::add_token::handler(ctx, config)
    }

    pub fn remove_token(ctx: Context<RemoveToken>) -> Result<u8> {
        instructions::remove_token::handler(ctx)
    }

    pub fn set_token_config(ctx: Context<SetTokenConfig>, config: CustodyConfig) -> Result<u8> {
        instructions::set_token_config::handler(ctx, config)
    }

    pub fn set_permissions(ctx: Context<SetPermissions>, permissions: Permissions) -> Result<u8> {
        instructions::set_permissions::handler(ctx, permissions)
    }

    pub fn set_protocol_fee_share(
        ctx: Context<SetProtocolFeeShare>,
        protocol_fee_share_bps: u16,
    ) -> Result<u8> {
        instructions::set_protocol_fee_share::handler(ctx, protocol_fee_share_bps)
    }

    pub fn set_admin_signers(
        ctx: Context<SetAdminSigners>,
        signers: Vec<Pubkey>,
        min_signatures: u8,
    ) -> Result<u8> {
        instructions::set_admin_signers::handler(ctx, signers, min_signatures)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<u8> {
        instructions::withdraw_fees::handler(ctx, amount)
    }

    pub fn cancel_admin_instruction(ctx: Context<CancelAdminInstruction>) -> Result<()> {
        instructions::cancel_admin_instruction::handler(ctx)
    }

    pub fn set_test_oracle_price(
        ctx: Context<SetTestOraclePrice>,
        params: SetTestOraclePriceParams,
    ) -> Result<()> {
        instructions::set_test_oracle_price::handler(ctx, params)
    }

    pub fn set_test_time(ctx: Context<SetTestTime>, time: i64) -> Result<()> {
        instructions::set_test_time::handler(ctx, time)
    }

    pub fn get_oracle_price(ctx: Context<GetOraclePrice>) -> Result<OraclePrice> {
        instructions::get_oracle_price::handler(ctx)
    }
}
