use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_POOL_NAME_LEN, MAX_POOL_TOKENS},
    error::ErrorCode,
};

#[account]
#[derive(InitSpace, Debug)]
pub struct Pool {
    #[max_len(MAX_POOL_NAME_LEN)]
    pub name: String,
    // custody accounts, in insertion order
    #[max_len(MAX_POOL_TOKENS)]
    pub custodies: Vec<Pubkey>,
    pub inception_time: i64,
    pub bump: u8,
}

impl Pool {
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() || name.len() > MAX_POOL_NAME_LEN {
            msg!(
                "Error: pool name must be 1..={} bytes, got {}",
                MAX_POOL_NAME_LEN,
                name.len()
            );
            return err!(ErrorCode::InvalidPoolName);
        }
        Ok(())
    }

    pub fn custody_index(&self, custody: &Pubkey) -> Result<usize> {
        self.custodies
            .iter()
            .position(|c| c == custody)
            .ok_or_else(|| error!(ErrorCode::NotFound))
    }

    pub fn add_custody(&mut self, custody: Pubkey) -> Result<()> {
        require!(
            !self.custodies.contains(&custody),
            ErrorCode::DuplicateAsset
        );
        require!(
            self.custodies.len() < MAX_POOL_TOKENS,
            ErrorCode::PoolFull
        );
        self.custodies.push(custody);
        Ok(())
    }

    /// Removes `custody`, keeping the relative order of the others.
    pub fn remove_custody(&mut self, custody: &Pubkey) -> Result<()> {
        let idx = self.custody_index(custody)?;
        self.custodies.remove(idx);
        Ok(())
    }

    pub fn require_empty(&self) -> Result<()> {
        if !self.custodies.is_empty() {
            msg!(
                "Error: pool {} still has {} custodies",
                self.name,
                self.custodies.len()
            );
            return err!(ErrorCode::PoolNotEmpty);
        }
        Ok(())
    }
}
