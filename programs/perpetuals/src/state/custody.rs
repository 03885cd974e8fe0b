use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::math::mul_bps_u64,
    state::{FeeOperation, Fees, OracleParams, Permissions},
};

/// Allowed share of the asset within its pool, in bps.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct TokenRatios {
    pub target: u64,
    pub min: u64,
    pub max: u64,
}

impl TokenRatios {
    pub fn validate(&self) -> Result<()> {
        if self.min > self.target || self.target > self.max {
            msg!(
                "Error: ratios require min <= target <= max, got min {} target {} max {}",
                self.min,
                self.target,
                self.max
            );
            return err!(ErrorCode::InvalidRatios);
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct Assets {
    // collateral debt
    pub collateral: u64,
    // part of the collected fees reserved for the protocol
    pub protocol_fees: u64,
    // owned = total_assets - collateral + collected_fees - protocol_fees
    pub owned: u64,
    // locked for pnl payoff
    pub locked: u64,
}

/// Accumulator keyed by fee operation, used for both collected fees and volume.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct OperationStats {
    pub swap_usd: u64,
    pub add_liquidity_usd: u64,
    pub remove_liquidity_usd: u64,
    pub open_position_usd: u64,
    pub close_position_usd: u64,
    pub liquidation_usd: u64,
}

impl OperationStats {
    pub fn get(&self, operation: FeeOperation) -> u64 {
        match operation {
            FeeOperation::Swap => self.swap_usd,
            FeeOperation::AddLiquidity => self.add_liquidity_usd,
            FeeOperation::RemoveLiquidity => self.remove_liquidity_usd,
            FeeOperation::OpenPosition => self.open_position_usd,
            FeeOperation::ClosePosition => self.close_position_usd,
            FeeOperation::Liquidation => self.liquidation_usd,
        }
    }

    pub fn add(&mut self, operation: FeeOperation, amount: u64) -> Result<()> {
        let slot = match operation {
            FeeOperation::Swap => &mut self.swap_usd,
            FeeOperation::AddLiquidity => &mut self.add_liquidity_usd,
            FeeOperation::RemoveLiquidity => &mut self.remove_liquidity_usd,
            FeeOperation::OpenPosition => &mut self.open_position_usd,
            FeeOperation::ClosePosition => &mut self.close_position_usd,
            FeeOperation::Liquidation => &mut self.liquidation_usd,
        };
        *slot = slot
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct TradeStats {
    pub profit_usd: u64,
    pub loss_usd: u64,
    pub oi_long_usd: u64,
    pub oi_short_usd: u64,
}

/// The mutable configuration blocks of a custody. `set_token_config`
/// replaces all four at once.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct CustodyConfig {
    pub oracle: OracleParams,
    pub permissions: Permissions,
    pub fees: Fees,
    pub ratios: TokenRatios,
}

impl CustodyConfig {
    pub fn validate(&self) -> Result<()> {
        self.oracle.validate()?;
        self.fees.validate()?;
        self.ratios.validate()
    }
}

#[account]
#[derive(InitSpace, Debug)]
pub struct Custody {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub decimals: u8,
    pub oracle: OracleParams,
    pub permissions: Permissions,
    pub fees: Fees,
    pub ratios: TokenRatios,

    pub assets: Assets,
    pub collected_fees: OperationStats,
    pub volume_stats: OperationStats,
    pub trade_stats: TradeStats,

    pub bump: u8,
}

impl Custody {
    pub fn new(
        pool: Pubkey,
        mint: Pubkey,
        token_account: Pubkey,
        decimals: u8,
        config: &CustodyConfig,
        bump: u8,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pool,
            mint,
            token_account,
            decimals,
            oracle: config.oracle,
            permissions: config.permissions,
            fees: config.fees,
            ratios: config.ratios,
            assets: Assets::default(),
            collected_fees: OperationStats::default(),
            volume_stats: OperationStats::default(),
            trade_stats: TradeStats::default(),
            bump,
        })
    }

    pub fn config(&self) -> CustodyConfig {
        CustodyConfig {
            oracle: self.oracle,
            permissions: self.permissions,
            fees: self.fees,
            ratios: self.ratios,
        }
    }

    /// Replaces the configuration blocks. Accumulators are left untouched.
    pub fn set_config(&mut self, config: &CustodyConfig) -> Result<()> {
        config.validate()?;
        self.oracle = config.oracle;
        self.permissions = config.permissions;
        self.fees = config.fees;
        self.ratios = config.ratios;
        Ok(())
    }

    pub fn check_ratio(&self, new_ratio: u64) -> bool {
        new_ratio >= self.ratios.min && new_ratio <= self.ratios.max
    }

    pub fn get_fee_amount(
        &self,
        operation: FeeOperation,
        amount: u64,
        new_ratio: Option<u64>,
    ) -> Result<u64> {
        self.fees
            .fee_amount(operation, amount, new_ratio, &self.ratios)
    }

    /// Books a collected fee; `protocol_fee_share_bps` of it is reserved for
    /// the protocol.
    pub fn collect_fee(
        &mut self,
        operation: FeeOperation,
        fee: u64,
        protocol_fee_share_bps: u16,
    ) -> Result<()> {
        let protocol_fee = mul_bps_u64(fee, protocol_fee_share_bps as u64)?;
        self.collected_fees.add(operation, fee)?;
        self.assets.protocol_fees = self
            .assets
            .protocol_fees
            .checked_add(protocol_fee)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn record_volume(&mut self, operation: FeeOperation, amount_usd: u64) -> Result<()> {
        self.volume_stats.add(operation, amount_usd)
    }

    pub fn withdraw_protocol_fees(&mut self, amount: u64) -> Result<()> {
        if amount == 0 || amount > self.assets.protocol_fees {
            msg!(
                "Error: withdraw {} of {} protocol fees",
                amount,
                self.assets.protocol_fees
            );
            return err!(ErrorCode::InsufficientProtocolFees);
        }
        self.assets.protocol_fees -= amount;
        Ok(())
    }
}
