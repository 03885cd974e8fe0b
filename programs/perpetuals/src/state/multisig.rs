use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_SIGNERS, PENDING_INSTRUCTION_TTL_SECS},
    error::ErrorCode,
    state::{accounts_hash, AdminInstruction, AdminOperation},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct PendingInstruction {
    pub operation: AdminOperation,
    pub accounts_hash: [u8; 32],
    pub payload_hash: [u8; 32],
    // parallel to `Multisig::signers`
    pub signed: [bool; MAX_SIGNERS],
    pub num_signed: u8,
    pub proposer: u8,
    pub proposed_at: i64,
}

impl PendingInstruction {
    fn matches(
        &self,
        operation: AdminOperation,
        accounts_hash: &[u8; 32],
        payload_hash: &[u8; 32],
    ) -> bool {
        self.operation == operation
            && &self.accounts_hash == accounts_hash
            && &self.payload_hash == payload_hash
    }
}

/// Outcome of a signature on the pending instruction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Approval {
    Pending { signatures_left: u8 },
    /// Threshold reached. The pending slot is already cleared and the caller
    /// must apply the instruction in the same transaction.
    Ready,
}

impl Approval {
    pub fn signatures_left(&self) -> u8 {
        match self {
            Approval::Pending { signatures_left } => *signatures_left,
            Approval::Ready => 0,
        }
    }
}

/// M-of-N admin quorum with a single pending instruction slot.
#[account]
#[derive(InitSpace, Debug)]
pub struct Multisig {
    pub signers: [Pubkey; MAX_SIGNERS],
    pub num_signers: u8,
    pub min_signatures: u8,
    pub pending: Option<PendingInstruction>,
    pub bump: u8,
}

impl Multisig {
    pub fn validate_signers(signers: &[Pubkey], min_signatures: u8) -> Result<()> {
        if min_signatures == 0
            || signers.len() > MAX_SIGNERS
            || min_signatures as usize > signers.len()
        {
            msg!(
                "Error: {} of {} signers is not a valid quorum, max {} signers",
                min_signatures,
                signers.len(),
                MAX_SIGNERS
            );
            return err!(ErrorCode::InvalidSignerSet);
        }
        for (i, signer) in signers.iter().enumerate() {
            if *signer == Pubkey::default() || signers[..i].contains(signer) {
                msg!("Error: invalid or duplicate signer {}", signer);
                return err!(ErrorCode::InvalidSignerSet);
            }
        }
        Ok(())
    }

    /// Replaces the signer set and drops any pending instruction.
    pub fn set_signers(&mut self, signers: &[Pubkey], min_signatures: u8) -> Result<()> {
        Self::validate_signers(signers, min_signatures)?;

        self.signers = [Pubkey::default(); MAX_SIGNERS];
        self.signers[..signers.len()].copy_from_slice(signers);
        self.num_signers = signers.len() as u8;
        self.min_signatures = min_signatures;
        self.pending = None;
        Ok(())
    }

    pub fn active_signers(&self) -> &[Pubkey] {
        &self.signers[..self.num_signers as usize]
    }

    pub fn signer_index(&self, signer: &Pubkey) -> Result<usize> {
        self.active_signers()
            .iter()
            .position(|s| s == signer)
            .ok_or_else(|| error!(ErrorCode::UnknownSigner))
    }

    pub fn propose(
        &mut self,
        operation: AdminOperation,
        accounts_hash: [u8; 32],
        payload_hash: [u8; 32],
        proposer: usize,
        now: i64,
    ) -> Result<()> {
        require!(self.pending.is_none(), ErrorCode::AlreadyPending);
        require!(proposer < self.num_signers as usize, ErrorCode::UnknownSigner);

        self.pending = Some(PendingInstruction {
            operation,
            accounts_hash,
            payload_hash,
            signed: [false; MAX_SIGNERS],
            num_signed: 0,
            proposer: proposer as u8,
            proposed_at: now,
        });
        Ok(())
    }

    pub fn approve(&mut self, signer_index: usize) -> Result<Approval> {
        let min_signatures = self.min_signatures;
        let num_signers = self.num_signers as usize;
        let pending = self
            .pending
            .as_mut()
            .ok_or_else(|| error!(ErrorCode::NoPendingInstruction))?;
        require!(signer_index < num_signers, ErrorCode::UnknownSigner);
        require!(!pending.signed[signer_index], ErrorCode::DuplicateApproval);

        pending.signed[signer_index] = true;
        pending.num_signed += 1;

        if pending.num_signed >= min_signatures {
            self.pending = None;
            return Ok(Approval::Ready);
        }
        Ok(Approval::Pending {
            signatures_left: min_signatures - pending.num_signed,
        })
    }

    /// Adds `signer`'s signature to `instruction` on `targets`, proposing it
    /// first when the slot is free.
    pub fn sign(
        &mut self,
        signer: &Pubkey,
        instruction: &AdminInstruction,
        targets: &[Pubkey],
        now: i64,
    ) -> Result<Approval> {
        let signer_index = self.signer_index(signer)?;
        instruction.validate()?;

        let operation = instruction.operation();
        let accounts_hash = accounts_hash(targets);
        let payload_hash = instruction.payload_hash()?;

        match self.pending {
            None => self.propose(operation, accounts_hash, payload_hash, signer_index, now)?,
            Some(pending) if pending.matches(operation, &accounts_hash, &payload_hash) => {}
            Some(pending) => {
                msg!(
                    "Error: {:?} is pending, can not sign {:?}",
                    pending.operation,
                    operation
                );
                return err!(ErrorCode::AlreadyPending);
            }
        }
        self.approve(signer_index)
    }

    /// Drops the pending instruction. The proposer may cancel at any time,
    /// other signers once it is older than `PENDING_INSTRUCTION_TTL_SECS`.
    pub fn cancel(&mut self, signer: &Pubkey, now: i64) -> Result<PendingInstruction> {
        let signer_index = self.signer_index(signer)?;
        let pending = self
            .pending
            .ok_or_else(|| error!(ErrorCode::NoPendingInstruction))?;

        let expired = now.saturating_sub(pending.proposed_at) >= PENDING_INSTRUCTION_TTL_SECS;
        if pending.proposer as usize != signer_index && !expired {
            msg!(
                "Error: pending {:?} proposed at {} is not expired",
                pending.operation,
                pending.proposed_at
            );
            return err!(ErrorCode::CancelNotAllowed);
        }

        self.pending = None;
        Ok(pending)
    }
}
