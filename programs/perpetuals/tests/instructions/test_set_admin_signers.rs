use perpetuals::Multisig;
use solana_program_test::{BanksClientError, ProgramTestContext};
use solana_sdk::{signature::Keypair, signer::Signer};

use crate::utils::{self, get_account, pda};

pub async fn set_admin_signers(
    program_test_ctx: &mut ProgramTestContext,
    admin: &Keypair,
    admin_signers: &[&Keypair],
    min_signatures: u8,
) -> Result<(), BanksClientError> {
    let accounts = perpetuals::accounts::SetAdminSigners {
        admin: admin.pubkey(),
        multisig: pda::get_multisig_pda().0,
        protocol_config: pda::get_protocol_config_pda().0,
    };
    let ix = utils::perpetuals_instruction(
        accounts,
        perpetuals::instruction::SetAdminSigners {
            signers: admin_signers.iter().map(|signer| signer.pubkey()).collect(),
            min_signatures,
        },
    );

    utils::process(program_test_ctx, ix, admin).await
}

pub async fn test_set_admin_signers(
    program_test_ctx: &mut ProgramTestContext,
    multisig_signers: &[&Keypair],
    admin_signers: &[&Keypair],
    min_signatures: u8,
) {
    let multisig_pda = pda::get_multisig_pda().0;
    let multisig = get_account::<Multisig>(program_test_ctx, multisig_pda).await;

    for signer in multisig_signers
        .iter()
        .take(multisig.min_signatures as usize)
    {
        set_admin_signers(program_test_ctx, signer, admin_signers, min_signatures)
            .await
            .unwrap();
    }

    let multisig = get_account::<Multisig>(program_test_ctx, multisig_pda).await;
    assert_eq!(multisig.min_signatures, min_signatures);
    assert_eq!(multisig.num_signers as usize, admin_signers.len());
}
