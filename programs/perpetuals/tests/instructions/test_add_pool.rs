use anchor_lang::prelude::Pubkey;
use perpetuals::{Multisig, Pool, ProtocolConfig};
use solana_program_test::{BanksClientError, ProgramTestContext};
use solana_sdk::{signature::Keypair, signer::Signer};

use crate::utils::{self, account_exists, get_account, pda};

/// One signature on `add_pool`.
pub async fn add_pool(
    program_test_ctx: &mut ProgramTestContext,
    admin: &Keypair,
    name: &str,
) -> Result<(), BanksClientError> {
    let accounts = perpetuals::accounts::AddPool {
        admin: admin.pubkey(),
        multisig: pda::get_multisig_pda().0,
        protocol_config: pda::get_protocol_config_pda().0,
        pool: pda::get_pool_pda(name).0,
        system_program: anchor_lang::system_program::ID,
    };
    let ix = utils::perpetuals_instruction(
        accounts,
        perpetuals::instruction::AddPool {
            name: name.to_string(),
        },
    );

    utils::process(program_test_ctx, ix, admin).await
}

pub async fn test_add_pool(
    program_test_ctx: &mut ProgramTestContext,
    multisig_signers: &[&Keypair],
    name: &str,
) -> Pubkey {
    let multisig_pda = pda::get_multisig_pda().0;
    let (pool_pda, pool_bump) = pda::get_pool_pda(name);
    let multisig = get_account::<Multisig>(program_test_ctx, multisig_pda).await;
    let min_signatures = multisig.min_signatures as usize;

    // One tx per multisig signer
    for (i, signer) in multisig_signers.iter().take(min_signatures).enumerate() {
        add_pool(program_test_ctx, signer, name).await.unwrap();

        if i + 1 < min_signatures {
            assert!(!account_exists(program_test_ctx, pool_pda).await);
            let multisig = get_account::<Multisig>(program_test_ctx, multisig_pda).await;
            assert_eq!(multisig.pending.unwrap().num_signed as usize, i + 1);
        }
    }

    let pool = get_account::<Pool>(program_test_ctx, pool_pda).await;
    assert_eq!(pool.name, name);
    assert_eq!(pool.bump, pool_bump);
    assert!(pool.custodies.is_empty());

    let config =
        get_account::<ProtocolConfig>(program_test_ctx, pda::get_protocol_config_pda().0).await;
    assert_eq!(config.pools.last(), Some(&pool_pda));

    let multisig = get_account::<Multisig>(program_test_ctx, multisig_pda).await;
    assert!(multisig.pending.is_none());

    pool_pda
}
