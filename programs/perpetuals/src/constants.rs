pub const MAX_SIGNERS: usize = 6;
pub const MAX_POOLS: usize = 16;
pub const MAX_POOL_TOKENS: usize = 8;
// PDA seeds are limited to 32 bytes.
pub const MAX_POOL_NAME_LEN: usize = 32;

pub const BPS_DENOM: u64 = 10_000;
pub const PRICE_DECIMALS: u8 = 6;

pub const PENDING_INSTRUCTION_TTL_SECS: i64 = 3 * 24 * 60 * 60;

pub const MULTISIG_SEED: &[u8] = b"multisig";
pub const PROTOCOL_CONFIG_SEED: &[u8] = b"protocol-config";
pub const TRANSFER_AUTHORITY_SEED: &[u8] = b"transfer-authority";
pub const POOL_SEED: &[u8] = b"pool";
pub const CUSTODY_SEED: &[u8] = b"custody";
pub const TEST_ORACLE_SEED: &[u8] = b"test-oracle";
