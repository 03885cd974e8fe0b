use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::{AdminInstructionExecuted, AdminInstructionSigned},
    state::{AdminInstruction, Approval, Multisig},
};

/// Signs `instruction` on behalf of `signer`. Returns `Approval::Ready` when
/// the caller has to apply the instruction now.
pub fn sign_admin_instruction(
    multisig: &mut Multisig,
    signer: &Pubkey,
    instruction: &AdminInstruction,
    targets: &[Pubkey],
    now: i64,
) -> Result<Approval> {
    let approval = multisig.sign(signer, instruction, targets, now)?;
    let operation = instruction.operation();

    match approval {
        Approval::Pending { signatures_left } => {
            msg!(
                "{:?} signed, {} signatures left",
                operation,
                signatures_left
            );
            emit!(AdminInstructionSigned {
                operation,
                signer: *signer,
                signatures_left,
            });
        }
        Approval::Ready => emit!(AdminInstructionExecuted {
            operation,
            signer: *signer,
            timestamp: now,
        }),
    }
    Ok(approval)
}

pub fn require_admin_signer(multisig: &Multisig, signer: &Pubkey) -> Result<()> {
    require!(
        multisig.active_signers().contains(signer),
        ErrorCode::UnknownSigner
    );
    Ok(())
}
