use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    helpers::math::{mul_bps_u64, mul_div_ceil_u64},
    state::TokenRatios,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeeOperation {
    Swap,
    AddLiquidity,
    RemoveLiquidity,
    OpenPosition,
    ClosePosition,
    Liquidation,
}

/// `numerator / denominator` of the traded amount.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct Fee {
    pub numerator: u64,
    pub denominator: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct FixedFees {
    pub swap: Fee,
    pub add_liquidity: Fee,
    pub remove_liquidity: Fee,
    pub open_position: Fee,
    pub close_position: Fee,
    pub liquidation: Fee,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub enum FeesMode {
    Fixed,
    #[default]
    Linear,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct BoundedFees {
    pub mode: FeesMode,
    // share of the base fee, in bps, the linear curve may add or remove
    // (2000 moves the fee by at most 20% of base)
    pub max_change: u64,
    pub swap: u64,
    pub add_liquidity: u64,
    pub remove_liquidity: u64,
    pub open_position: u64,
    pub close_position: u64,
    pub liquidation: u64,
}

/// Per-custody fee schedule. `Fixed` is the fraction based layout of the
/// first protocol version, `Bounded` the bps layout with ratio steering.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum Fees {
    Fixed(FixedFees),
    Bounded(BoundedFees),
}

impl Default for Fees {
    fn default() -> Self {
        Self::Bounded(BoundedFees::default())
    }
}

impl Fee {
    pub fn validate(&self) -> bool {
        self.denominator > 0 && self.numerator <= self.denominator
    }

    pub fn get_fee_amount(&self, amount: u64) -> Result<u64> {
        if self.numerator == 0 || amount == 0 {
            return Ok(0);
        }
        mul_div_ceil_u64(amount, self.numerator, self.denominator)
    }
}

impl FixedFees {
    pub fn get(&self, operation: FeeOperation) -> Fee {
        match operation {
            FeeOperation::Swap => self.swap,
            FeeOperation::AddLiquidity => self.add_liquidity,
            FeeOperation::RemoveLiquidity => self.remove_liquidity,
            FeeOperation::OpenPosition => self.open_position,
            FeeOperation::ClosePosition => self.close_position,
            FeeOperation::Liquidation => self.liquidation,
        }
    }

    fn all(&self) -> [Fee; 6] {
        [
            self.swap,
            self.add_liquidity,
            self.remove_liquidity,
            self.open_position,
            self.close_position,
            self.liquidation,
        ]
    }
}

impl BoundedFees {
    pub fn get(&self, operation: FeeOperation) -> u64 {
        match operation {
            FeeOperation::Swap => self.swap,
            FeeOperation::AddLiquidity => self.add_liquidity,
            FeeOperation::RemoveLiquidity => self.remove_liquidity,
            FeeOperation::OpenPosition => self.open_position,
            FeeOperation::ClosePosition => self.close_position,
            FeeOperation::Liquidation => self.liquidation,
        }
    }

    fn all(&self) -> [u64; 6] {
        [
            self.swap,
            self.add_liquidity,
            self.remove_liquidity,
            self.open_position,
            self.close_position,
            self.liquidation,
        ]
    }

    /// Highest rate the linear curve can reach from `base`.
    fn peak_bps(&self, base: u64) -> Result<u64> {
        base.checked_add(mul_bps_u64(base, self.max_change)?)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    fn is_valid(&self) -> bool {
        self.all().iter().all(|&bps| {
            bps <= BPS_DENOM
                && (self.mode == FeesMode::Fixed
                    || matches!(self.peak_bps(bps), Ok(peak) if peak <= BPS_DENOM))
        })
    }

    /// Fee rate in bps for `operation` once the custody reaches `new_ratio`
    /// of the pool.
    pub fn fee_bps(
        &self,
        operation: FeeOperation,
        new_ratio: Option<u64>,
        ratios: &TokenRatios,
    ) -> Result<u64> {
        let base = self.get(operation);
        let new_ratio = match (self.mode, new_ratio) {
            (FeesMode::Linear, Some(ratio)) => ratio,
            _ => return Ok(base),
        };

        let max_fee_change = mul_bps_u64(base, self.max_change)?;
        if new_ratio >= ratios.target {
            let span = ratios.max - ratios.target;
            let distance = new_ratio.min(ratios.max) - ratios.target;
            let increase = if span == 0 {
                if new_ratio > ratios.target {
                    max_fee_change
                } else {
                    0
                }
            } else {
                mul_div_ceil_u64(distance, max_fee_change, span)?
            };
            let bps = base
                .checked_add(increase)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            Ok(bps.min(BPS_DENOM))
        } else {
            let span = ratios.target - ratios.min;
            let distance = ratios.target - new_ratio.max(ratios.min);
            let decrease = if span == 0 {
                max_fee_change
            } else {
                mul_div_ceil_u64(distance, max_fee_change, span)?
            };
            Ok(base.saturating_sub(decrease))
        }
    }
}

impl Fees {
    pub fn validate(&self) -> Result<()> {
        let valid = match self {
            Fees::Fixed(fees) => fees.all().iter().all(Fee::validate),
            Fees::Bounded(fees) => fees.is_valid(),
        };
        if !valid {
            msg!("Error: invalid fee schedule {:?}", self);
            return err!(ErrorCode::InvalidFeeConfig);
        }
        Ok(())
    }

    /// Fee charged on `amount` for `operation`. `new_ratio` is the custody's
    /// share of the pool after the operation, in bps; it only matters for
    /// linear bounded fees.
    pub fn fee_amount(
        &self,
        operation: FeeOperation,
        amount: u64,
        new_ratio: Option<u64>,
        ratios: &TokenRatios,
    ) -> Result<u64> {
        match self {
            Fees::Fixed(fees) => fees.get(operation).get_fee_amount(amount),
            Fees::Bounded(fees) => {
                let bps = fees.fee_bps(operation, new_ratio, ratios)?;
                if bps == 0 || amount == 0 {
                    return Ok(0);
                }
                mul_div_ceil_u64(amount, bps, BPS_DENOM)
            }
        }
    }
}
