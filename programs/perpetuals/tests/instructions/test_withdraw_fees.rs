use anchor_lang::prelude::Pubkey;
use perpetuals::{Custody, Multisig};
use solana_program_test::{BanksClientError, ProgramTestContext};
use solana_sdk::{signature::Keypair, signer::Signer};

use crate::utils::{self, get_account, get_token_balance, pda};

pub struct WithdrawFeesAccounts {
    pub pool: Pubkey,
    pub custody: Pubkey,
    pub custody_token_account: Pubkey,
    pub receiving_token_account: Pubkey,
}

pub async fn withdraw_fees(
    program_test_ctx: &mut ProgramTestContext,
    admin: &Keypair,
    targets: &WithdrawFeesAccounts,
    amount: u64,
) -> Result<(), BanksClientError> {
    let accounts = perpetuals::accounts::WithdrawFees {
        admin: admin.pubkey(),
        multisig: pda::get_multisig_pda().0,
        protocol_config: pda::get_protocol_config_pda().0,
        transfer_authority: pda::get_transfer_authority_pda().0,
        pool: targets.pool,
        custody: targets.custody,
        custody_token_account: targets.custody_token_account,
        receiving_token_account: targets.receiving_token_account,
        token_program: anchor_spl::token::ID,
    };
    let ix = utils::perpetuals_instruction(
        accounts,
        perpetuals::instruction::WithdrawFees { amount },
    );

    utils::process(program_test_ctx, ix, admin).await
}

pub async fn test_withdraw_fees(
    program_test_ctx: &mut ProgramTestContext,
    multisig_signers: &[&Keypair],
    targets: &WithdrawFeesAccounts,
    amount: u64,
) {
    let multisig = get_account::<Multisig>(program_test_ctx, pda::get_multisig_pda().0).await;
    let custody_before = get_account::<Custody>(program_test_ctx, targets.custody).await;
    let custody_balance_before =
        get_token_balance(program_test_ctx, targets.custody_token_account).await;
    let receiver_balance_before =
        get_token_balance(program_test_ctx, targets.receiving_token_account).await;

    for signer in multisig_signers
        .iter()
        .take(multisig.min_signatures as usize)
    {
        withdraw_fees(program_test_ctx, signer, targets, amount)
            .await
            .unwrap();
    }

    let custody_after = get_account::<Custody>(program_test_ctx, targets.custody).await;
    assert_eq!(
        custody_after.assets.protocol_fees,
        custody_before.assets.protocol_fees - amount
    );
    assert_eq!(
        get_token_balance(program_test_ctx, targets.custody_token_account).await,
        custody_balance_before - amount
    );
    assert_eq!(
        get_token_balance(program_test_ctx, targets.receiving_token_account).await,
        receiver_balance_before + amount
    );
}
