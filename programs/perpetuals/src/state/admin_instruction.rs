use anchor_lang::{prelude::*, solana_program::hash::hashv};

use crate::{
    error::ErrorCode,
    state::{validate_protocol_fee_share, CustodyConfig, Multisig, Permissions, Pool},
};

/// Discriminant of a pending admin instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum AdminOperation {
    AddPool,
    RemovePool,
    AddToken,
    RemoveToken,
    SetTokenConfig,
    SetPermissions,
    SetProtocolFeeShare,
    SetAdminSigners,
    WithdrawFees,
}

/// Every privileged mutation, with its arguments. Only the hashes of an
/// instruction are stored while it collects signatures; each signer resubmits
/// the full instruction and the hashes must match.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum AdminInstruction {
    AddPool { name: String },
    RemovePool,
    AddToken(CustodyConfig),
    RemoveToken,
    SetTokenConfig(CustodyConfig),
    SetPermissions(Permissions),
    SetProtocolFeeShare { protocol_fee_share_bps: u16 },
    SetAdminSigners { signers: Vec<Pubkey>, min_signatures: u8 },
    WithdrawFees { amount: u64 },
}

impl AdminInstruction {
    pub fn operation(&self) -> AdminOperation {
        match self {
            AdminInstruction::AddPool { .. } => AdminOperation::AddPool,
            AdminInstruction::RemovePool => AdminOperation::RemovePool,
            AdminInstruction::AddToken(_) => AdminOperation::AddToken,
            AdminInstruction::RemoveToken => AdminOperation::RemoveToken,
            AdminInstruction::SetTokenConfig(_) => AdminOperation::SetTokenConfig,
            AdminInstruction::SetPermissions(_) => AdminOperation::SetPermissions,
            AdminInstruction::SetProtocolFeeShare { .. } => AdminOperation::SetProtocolFeeShare,
            AdminInstruction::SetAdminSigners { .. } => AdminOperation::SetAdminSigners,
            AdminInstruction::WithdrawFees { .. } => AdminOperation::WithdrawFees,
        }
    }

    /// Argument checks that do not depend on account state.
    pub fn validate(&self) -> Result<()> {
        match self {
            AdminInstruction::AddPool { name } => Pool::validate_name(name),
            AdminInstruction::RemovePool
            | AdminInstruction::RemoveToken
            | AdminInstruction::SetPermissions(_) => Ok(()),
            AdminInstruction::AddToken(config) | AdminInstruction::SetTokenConfig(config) => {
                config.validate()
            }
            AdminInstruction::SetProtocolFeeShare {
                protocol_fee_share_bps,
            } => validate_protocol_fee_share(*protocol_fee_share_bps),
            AdminInstruction::SetAdminSigners {
                signers,
                min_signatures,
            } => Multisig::validate_signers(signers, *min_signatures),
            AdminInstruction::WithdrawFees { amount } => {
                require!(*amount > 0, ErrorCode::InsufficientProtocolFees);
                Ok(())
            }
        }
    }

    pub fn payload_hash(&self) -> Result<[u8; 32]> {
        let mut payload = Vec::new();
        AnchorSerialize::serialize(self, &mut payload)
            .map_err(|_| anchor_lang::error::ErrorCode::InstructionDidNotSerialize)?;
        Ok(hashv(&[&payload]).to_bytes())
    }
}

/// Fingerprint of the accounts an instruction operates on.
pub fn accounts_hash(targets: &[Pubkey]) -> [u8; 32] {
    let keys: Vec<&[u8]> = targets.iter().map(|key| key.as_ref()).collect();
    hashv(&keys).to_bytes()
}
