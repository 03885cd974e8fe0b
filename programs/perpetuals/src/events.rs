use anchor_lang::prelude::*;

use crate::state::AdminOperation;

#[event]
pub struct AdminInstructionSigned {
    pub operation: AdminOperation,
    pub signer: Pubkey,
    pub signatures_left: u8,
}

#[event]
pub struct AdminInstructionExecuted {
    pub operation: AdminOperation,
    pub signer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AdminInstructionCancelled {
    pub operation: AdminOperation,
    pub signer: Pubkey,
    pub proposed_at: i64,
}

#[event]
pub struct PoolAdded {
    pub pool: Pubkey,
    pub name: String,
}

#[event]
pub struct PoolRemoved {
    pub pool: Pubkey,
    pub name: String,
}

#[event]
pub struct TokenAdded {
    pub pool: Pubkey,
    pub custody: Pubkey,
    pub mint: Pubkey,
}

#[event]
pub struct TokenRemoved {
    pub pool: Pubkey,
    pub custody: Pubkey,
    pub mint: Pubkey,
}

#[event]
pub struct TokenConfigUpdated {
    pub pool: Pubkey,
    pub custody: Pubkey,
}

#[event]
pub struct FeesWithdrawn {
    pub custody: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub protocol_fees_left: u64,
}
