use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, MAX_POOLS},
    error::ErrorCode,
    helpers::clock::{ClusterClock, FixedClock, TimeSource},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct Permissions {
    pub allow_swap: bool,
    pub allow_add_liquidity: bool,
    pub allow_remove_liquidity: bool,
    pub allow_open_position: bool,
    pub allow_close_position: bool,
    pub allow_pnl_withdrawal: bool,
    pub allow_collateral_withdrawal: bool,
    pub allow_size_change: bool,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct ProtocolConfig {
    pub permissions: Permissions,
    pub protocol_fee_share_bps: u16,
    #[max_len(MAX_POOLS)]
    pub pools: Vec<Pubkey>,
    pub inception_time: i64,
    // wall clock override, only read by `test` builds
    pub test_time: i64,
    pub transfer_authority_bump: u8,
    pub bump: u8,
}

pub fn validate_protocol_fee_share(protocol_fee_share_bps: u16) -> Result<()> {
    if protocol_fee_share_bps as u64 > BPS_DENOM {
        msg!(
            "Error: protocol_fee_share_bps {} exceeds {}",
            protocol_fee_share_bps,
            BPS_DENOM
        );
        return err!(ErrorCode::InvalidProtocolConfig);
    }
    Ok(())
}

impl ProtocolConfig {
    pub fn clock(&self) -> Box<dyn TimeSource> {
        if cfg!(feature = "test") {
            Box::new(FixedClock(self.test_time))
        } else {
            Box::new(ClusterClock)
        }
    }

    pub fn get_time(&self) -> Result<i64> {
        self.clock().unix_timestamp()
    }

    /// Checks that `pool` can still be registered.
    pub fn check_new_pool(&self, pool: &Pubkey) -> Result<()> {
        require!(!self.pools.contains(pool), ErrorCode::DuplicateName);
        if self.pools.len() >= MAX_POOLS {
            msg!("Error: {} pools registered, max {}", self.pools.len(), MAX_POOLS);
            return err!(ErrorCode::TooManyPools);
        }
        Ok(())
    }

    pub fn register_pool(&mut self, pool: Pubkey) -> Result<()> {
        self.check_new_pool(&pool)?;
        self.pools.push(pool);
        Ok(())
    }

    pub fn unregister_pool(&mut self, pool: &Pubkey) -> Result<()> {
        let idx = self
            .pools
            .iter()
            .position(|p| p == pool)
            .ok_or_else(|| error!(ErrorCode::NotFound))?;
        self.pools.remove(idx);
        Ok(())
    }
}
