use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    helpers::math::{checked_as_u64, pow10_u128},
};

const PYTH_PUSH_ORACLE_PROGRAM_ID: Pubkey = pubkey!("pythWSnswVUd12oZpeFP8e9CVaEqJg25g1Vtc2biRsT");
const PRICE_UPDATE_V2_DISCRIMINATOR: [u8; 8] = [34, 241, 35, 99, 157, 126, 244, 205];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub enum OracleType {
    #[default]
    Test,
    Pyth,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default, Debug)]
pub struct OracleParams {
    pub oracle_account: Pubkey,
    pub oracle_type: OracleType,
    // Pyth price feed id, unused by the test oracle
    pub pyth_feed: Pubkey,
    // max confidence / price, in bps
    pub max_price_error: u64,
    pub max_price_age_sec: u32,
}

/// Raw quote as published by a price source, before any trust checks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PriceQuote {
    pub price: i64,
    pub conf: u64,
    pub exponent: i32,
    pub publish_time: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct OraclePrice {
    pub price: u64,
    pub exponent: i32,
}

/// Price written by `set_test_oracle_price`.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct TestOracle {
    pub price: u64,
    pub expo: i32,
    pub conf: u64,
    pub publish_time: i64,
    pub bump: u8,
}

pub trait PriceSource {
    fn quote(&self) -> Result<PriceQuote>;
}

impl PriceSource for TestOracle {
    fn quote(&self) -> Result<PriceQuote> {
        Ok(PriceQuote {
            price: i64::try_from(self.price).map_err(|_| error!(ErrorCode::InvalidOracle))?,
            conf: self.conf,
            exponent: self.expo,
            publish_time: self.publish_time,
        })
    }
}

/// Pyth push-oracle `PriceUpdateV2` account.
pub struct PythPriceUpdate(PriceUpdateV2Wire);

impl PythPriceUpdate {
    pub fn from_account_info(price_update: &AccountInfo) -> Result<Self> {
        require_keys_eq!(
            *price_update.owner,
            PYTH_PUSH_ORACLE_PROGRAM_ID,
            ErrorCode::InvalidOracle
        );

        let data = price_update
            .try_borrow_data()
            .map_err(|_| error!(ErrorCode::InvalidOracle))?;
        Self::from_bytes(&data)
    }

    fn from_bytes(data: &[u8]) -> Result<Self> {
        require!(
            data.len() >= PRICE_UPDATE_V2_DISCRIMINATOR.len(),
            ErrorCode::InvalidOracle
        );
        require!(
            data[..8] == PRICE_UPDATE_V2_DISCRIMINATOR,
            ErrorCode::InvalidOracle
        );

        let mut payload = &data[8..];
        let price_update = PriceUpdateV2Wire::deserialize(&mut payload)
            .map_err(|_| error!(ErrorCode::InvalidOracle))?;

        require!(
            matches!(price_update.verification_level, VerificationLevelWire::Full),
            ErrorCode::InvalidOracle
        );

        Ok(Self(price_update))
    }

    pub fn feed_id(&self) -> [u8; 32] {
        self.0.price_message.feed_id
    }
}

impl PriceSource for PythPriceUpdate {
    fn quote(&self) -> Result<PriceQuote> {
        let message = &self.0.price_message;
        Ok(PriceQuote {
            price: message.price,
            conf: message.conf,
            exponent: message.exponent,
            publish_time: message.publish_time,
        })
    }
}

impl OracleParams {
    pub fn validate(&self) -> Result<()> {
        if self.max_price_age_sec == 0 {
            msg!("Error: oracle max_price_age_sec must be positive");
            return err!(ErrorCode::InvalidOracleConfig);
        }
        if self.oracle_account == Pubkey::default() {
            msg!("Error: oracle account is not set");
            return err!(ErrorCode::InvalidOracleConfig);
        }
        if self.oracle_type == OracleType::Pyth && self.pyth_feed == Pubkey::default() {
            msg!("Error: pyth feed id is not set");
            return err!(ErrorCode::InvalidOracleConfig);
        }
        Ok(())
    }

    /// Reads the current quote from the configured price source.
    pub fn load_quote(&self, oracle_account: &AccountInfo) -> Result<PriceQuote> {
        require_keys_eq!(
            oracle_account.key(),
            self.oracle_account,
            ErrorCode::InvalidOracle
        );

        match self.oracle_type {
            OracleType::Test => {
                require_keys_eq!(*oracle_account.owner, crate::ID, ErrorCode::InvalidOracle);
                let data = oracle_account.try_borrow_data()?;
                let mut bytes: &[u8] = &data;
                TestOracle::try_deserialize(&mut bytes)?.quote()
            }
            OracleType::Pyth => {
                self.pyth_quote(&PythPriceUpdate::from_account_info(oracle_account)?)
            }
        }
    }

    fn pyth_quote(&self, price_update: &PythPriceUpdate) -> Result<PriceQuote> {
        require!(
            price_update.feed_id() == self.pyth_feed.to_bytes(),
            ErrorCode::InvalidOracle
        );
        price_update.quote()
    }

    pub fn validate_quote(&self, quote: &PriceQuote, now: i64) -> Result<OraclePrice> {
        let age = now
            .checked_sub(quote.publish_time)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        require!(age >= 0, ErrorCode::InvalidOracle);
        if age > self.max_price_age_sec as i64 {
            msg!(
                "Error: oracle price is stale, age {}s, max {}s",
                age,
                self.max_price_age_sec
            );
            return err!(ErrorCode::StaleOracle);
        }

        require!(quote.price > 0, ErrorCode::InvalidOracle);
        let price = quote.price as u64;

        let conf_bps = (quote.conf as u128)
            .checked_mul(BPS_DENOM as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?
            / price as u128;
        if conf_bps > self.max_price_error as u128 {
            msg!(
                "Error: oracle price error {} bps exceeds {} bps",
                conf_bps,
                self.max_price_error
            );
            return err!(ErrorCode::PriceErrorExceeded);
        }

        Ok(OraclePrice {
            price,
            exponent: quote.exponent,
        })
    }

    pub fn get_price(&self, oracle_account: &AccountInfo, now: i64) -> Result<OraclePrice> {
        let quote = self.load_quote(oracle_account)?;
        self.validate_quote(&quote, now)
    }
}

impl OraclePrice {
    pub fn scale_to_exponent(&self, target_exponent: i32) -> Result<OraclePrice> {
        if target_exponent == self.exponent {
            return Ok(*self);
        }
        let delta = target_exponent
            .checked_sub(self.exponent)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let factor = pow10_u128(delta.unsigned_abs())?;
        let price = if delta > 0 {
            self.price as u128 / factor
        } else {
            (self.price as u128)
                .checked_mul(factor)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        };
        Ok(OraclePrice {
            price: checked_as_u64(price)?,
            exponent: target_exponent,
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, PartialEq, Eq, Debug)]
enum VerificationLevelWire {
    Partial { num_signatures: u8 },
    Full,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug)]
struct PriceFeedMessageWire {
    feed_id: [u8; 32],
    price: i64,
    conf: u64,
    exponent: i32,
    publish_time: i64,
    prev_publish_time: i64,
    ema_price: i64,
    ema_conf: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug)]
struct PriceUpdateV2Wire {
    write_authority: Pubkey,
    verification_level: VerificationLevelWire,
    price_message: PriceFeedMessageWire,
    posted_slot: u64,
}
