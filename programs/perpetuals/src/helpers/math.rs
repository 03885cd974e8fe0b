use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn mul_bps_u64(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .and_then(checked_as_u64)
}

/// `ceil(value * numerator / denominator)`
pub fn mul_div_ceil_u64(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    checked_as_u64(ceil_div_u128(product, denominator as u128)?)
}

pub fn ceil_div_u128(numerator: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(error!(ErrorCode::MathOverflow));
    }
    let adjusted = numerator
        .checked_add(denominator - 1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    adjusted
        .checked_div(denominator)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn pow10_u128(power: u32) -> Result<u128> {
    10_u128
        .checked_pow(power)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn checked_as_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}
