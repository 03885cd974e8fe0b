use anchor_lang::prelude::Pubkey;
use perpetuals::{Multisig, Pool};
use solana_program_test::{BanksClientError, ProgramTestContext};
use solana_sdk::{signature::Keypair, signer::Signer};

use crate::utils::{self, account_exists, get_account, pda};

pub async fn remove_token(
    program_test_ctx: &mut ProgramTestContext,
    admin: &Keypair,
    pool_pda: Pubkey,
    custody_pda: Pubkey,
) -> Result<(), BanksClientError> {
    let accounts = perpetuals::accounts::RemoveToken {
        admin: admin.pubkey(),
        multisig: pda::get_multisig_pda().0,
        protocol_config: pda::get_protocol_config_pda().0,
        pool: pool_pda,
        custody: custody_pda,
    };
    let ix = utils::perpetuals_instruction(accounts, perpetuals::instruction::RemoveToken {});

    utils::process(program_test_ctx, ix, admin).await
}

pub async fn test_remove_token(
    program_test_ctx: &mut ProgramTestContext,
    multisig_signers: &[&Keypair],
    pool_pda: Pubkey,
    custody_pda: Pubkey,
) {
    let multisig = get_account::<Multisig>(program_test_ctx, pda::get_multisig_pda().0).await;

    for signer in multisig_signers
        .iter()
        .take(multisig.min_signatures as usize)
    {
        remove_token(program_test_ctx, signer, pool_pda, custody_pda)
            .await
            .unwrap();
    }

    assert!(!account_exists(program_test_ctx, custody_pda).await);
    let pool = get_account::<Pool>(program_test_ctx, pool_pda).await;
    assert!(!pool.custodies.contains(&custody_pda));
}
