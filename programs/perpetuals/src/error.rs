use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not part of the admin multisig")]
    UnknownSigner,
    #[msg("Signer has already approved the pending instruction")]
    DuplicateApproval,
    #[msg("No admin instruction is pending")]
    NoPendingInstruction,
    #[msg("A different admin instruction is already pending")]
    AlreadyPending,
    #[msg("Pending instruction can not be cancelled by this signer yet")]
    CancelNotAllowed,
    #[msg("Invalid signer set")]
    InvalidSignerSet,
    #[msg("Pool name already exists")]
    DuplicateName,
    #[msg("Asset already added to the pool")]
    DuplicateAsset,
    #[msg("Not found")]
    NotFound,
    #[msg("Pool still has custodies")]
    PoolNotEmpty,
    #[msg("Pool token list is full")]
    PoolFull,
    #[msg("Too many pools")]
    TooManyPools,
    #[msg("Invalid pool name")]
    InvalidPoolName,
    #[msg("Invalid token ratios")]
    InvalidRatios,
    #[msg("Invalid fee config")]
    InvalidFeeConfig,
    #[msg("Invalid oracle config")]
    InvalidOracleConfig,
    #[msg("Invalid protocol config")]
    InvalidProtocolConfig,
    #[msg("Stale oracle price")]
    StaleOracle,
    #[msg("Oracle price error exceeds the configured bound")]
    PriceErrorExceeded,
    #[msg("Invalid oracle input")]
    InvalidOracle,
    #[msg("Instruction is not allowed in this environment")]
    InvalidEnvironment,
    #[msg("Insufficient protocol fees")]
    InsufficientProtocolFees,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Math overflow")]
    MathOverflow,
}
