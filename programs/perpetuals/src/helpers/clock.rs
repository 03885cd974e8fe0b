use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Source of the protocol's wall clock.
pub trait TimeSource {
    fn unix_timestamp(&self) -> Result<i64>;
}

/// Reads the cluster clock sysvar.
pub struct ClusterClock;

impl TimeSource for ClusterClock {
    fn unix_timestamp(&self) -> Result<i64> {
        let now = Clock::get()?.unix_timestamp;
        require!(now > 0, ErrorCode::InvalidEnvironment);
        Ok(now)
    }
}

/// Always returns the same timestamp. Used by `test` builds, where the
/// timestamp is driven by `set_test_time`.
pub struct FixedClock(pub i64);

impl TimeSource for FixedClock {
    fn unix_timestamp(&self) -> Result<i64> {
        Ok(self.0)
    }
}
