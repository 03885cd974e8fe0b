pub mod pda;

use anchor_lang::{
    prelude::{Pubkey, UpgradeableLoaderState},
    solana_program::{
        account_info::AccountInfo,
        bpf_loader_upgradeable,
        entrypoint::ProgramResult,
        program_option::COption,
        program_pack::{IsInitialized, Pack},
    },
    AccountDeserialize, AccountSerialize, InstructionData, ToAccountMetas,
};
use anchor_spl::token::spl_token;
use perpetuals::{
    BoundedFees, Custody, CustodyConfig, Fees, FeesMode, OracleParams, OracleType, Permissions,
    TokenRatios,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::{Account, AccountSharedData},
    instruction::{Instruction, InstructionError},
    rent::Rent,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

pub const CUSTODY_TOKEN_BALANCE: u64 = 1_000_000;

pub struct TestSetup {
    pub program_test_ctx: ProgramTestContext,
    pub upgrade_authority: Keypair,
    pub signers: Vec<Keypair>,
    pub mint: Pubkey,
    pub custody_token_account: Pubkey,
    // owned by the first signer
    pub receiving_token_account: Pubkey,
}

// Anchor's entry ties the account slice to the account lifetime.
fn process_instruction<'a, 'b, 'c, 'd>(
    program_id: &'a Pubkey,
    accounts: &'b [AccountInfo<'c>],
    data: &'d [u8],
) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    perpetuals::entry(program_id, accounts, data)
}

pub fn create_and_fund_account(address: &Pubkey, program_test: &mut ProgramTest) {
    program_test.add_account(
        *address,
        Account {
            lamports: 10_000_000_000,
            ..Account::default()
        },
    );
}

// Program data of an upgradeable deployment, so `init` can check the upgrade authority.
fn add_program_data(program_test: &mut ProgramTest, upgrade_authority: &Pubkey) {
    let program_data = UpgradeableLoaderState::ProgramData {
        slot: 1,
        upgrade_authority_address: Some(*upgrade_authority),
    };
    let data = bincode::serialize(&program_data).unwrap();

    program_test.add_account(
        pda::get_program_data_pda().0,
        Account {
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            owner: bpf_loader_upgradeable::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

fn add_packed_account<T: Pack + IsInitialized>(
    program_test: &mut ProgramTest,
    address: Pubkey,
    state: T,
) {
    let mut data = vec![0u8; T::LEN];
    T::pack(state, &mut data).unwrap();

    program_test.add_account(
        address,
        Account {
            lamports: Rent::default().minimum_balance(T::LEN),
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

fn token_account_state(mint: Pubkey, owner: Pubkey, amount: u64) -> spl_token::state::Account {
    spl_token::state::Account {
        mint,
        owner,
        amount,
        delegate: COption::None,
        state: spl_token::state::AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    }
}

pub async fn setup(num_signers: usize) -> TestSetup {
    let mut program_test = ProgramTest::new(
        "perpetuals",
        perpetuals::id(),
        processor!(process_instruction),
    );
    program_test.prefer_bpf(false);

    let upgrade_authority = Keypair::new();
    let signers: Vec<Keypair> = (0..num_signers).map(|_| Keypair::new()).collect();

    create_and_fund_account(&upgrade_authority.pubkey(), &mut program_test);
    for signer in &signers {
        create_and_fund_account(&signer.pubkey(), &mut program_test);
    }
    add_program_data(&mut program_test, &upgrade_authority.pubkey());

    let mint = Pubkey::new_unique();
    add_packed_account(
        &mut program_test,
        mint,
        spl_token::state::Mint {
            mint_authority: COption::Some(upgrade_authority.pubkey()),
            supply: CUSTODY_TOKEN_BALANCE,
            decimals: 6,
            is_initialized: true,
            freeze_authority: COption::None,
        },
    );

    let custody_token_account = Pubkey::new_unique();
    add_packed_account(
        &mut program_test,
        custody_token_account,
        token_account_state(
            mint,
            pda::get_transfer_authority_pda().0,
            CUSTODY_TOKEN_BALANCE,
        ),
    );

    let receiving_token_account = Pubkey::new_unique();
    add_packed_account(
        &mut program_test,
        receiving_token_account,
        token_account_state(mint, signers[0].pubkey(), 0),
    );

    let program_test_ctx = program_test.start_with_context().await;

    TestSetup {
        program_test_ctx,
        upgrade_authority,
        signers,
        mint,
        custody_token_account,
        receiving_token_account,
    }
}

pub fn perpetuals_instruction(
    accounts: impl ToAccountMetas,
    arguments: impl InstructionData,
) -> Instruction {
    Instruction {
        program_id: perpetuals::id(),
        accounts: accounts.to_account_metas(None),
        data: arguments.data(),
    }
}

/// Sends `ix` with `payer` as the only signer.
pub async fn process(
    program_test_ctx: &mut ProgramTestContext,
    ix: Instruction,
    payer: &Keypair,
) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        program_test_ctx.last_blockhash,
    );
    program_test_ctx.banks_client.process_transaction(tx).await
}

pub fn assert_custom_error(result: Result<(), BanksClientError>, code: u32) {
    match result.unwrap_err().unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(found)) => {
            assert_eq!(found, code)
        }
        err => panic!("expected custom error {}, got {:?}", code, err),
    }
}

pub async fn account_exists(program_test_ctx: &mut ProgramTestContext, key: Pubkey) -> bool {
    program_test_ctx
        .banks_client
        .get_account(key)
        .await
        .unwrap()
        .is_some()
}

pub async fn get_account<T: AccountDeserialize>(
    program_test_ctx: &mut ProgramTestContext,
    key: Pubkey,
) -> T {
    let account = program_test_ctx
        .banks_client
        .get_account(key)
        .await
        .unwrap()
        .unwrap();

    T::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn get_token_balance(program_test_ctx: &mut ProgramTestContext, key: Pubkey) -> u64 {
    let account = program_test_ctx
        .banks_client
        .get_account(key)
        .await
        .unwrap()
        .unwrap();

    spl_token::state::Account::unpack(&account.data)
        .unwrap()
        .amount
}

/// Overwrites the protocol fee balance of a custody, standing in for trading
/// activity.
pub async fn set_protocol_fees(
    program_test_ctx: &mut ProgramTestContext,
    custody_pda: Pubkey,
    protocol_fees: u64,
) {
    let mut account = program_test_ctx
        .banks_client
        .get_account(custody_pda)
        .await
        .unwrap()
        .unwrap();
    let mut custody = Custody::try_deserialize(&mut account.data.as_slice()).unwrap();
    custody.assets.protocol_fees = protocol_fees;

    let mut writer: &mut [u8] = account.data.as_mut_slice();
    custody.try_serialize(&mut writer).unwrap();
    program_test_ctx.set_account(&custody_pda, &AccountSharedData::from(account));
}

pub fn custody_config(oracle_account: Pubkey) -> CustodyConfig {
    CustodyConfig {
        oracle: OracleParams {
            oracle_account,
            oracle_type: OracleType::Test,
            pyth_feed: Pubkey::default(),
            max_price_error: 100,
            max_price_age_sec: 60,
        },
        permissions: Permissions {
            allow_swap: true,
            allow_add_liquidity: true,
            allow_remove_liquidity: true,
            ..Permissions::default()
        },
        fees: Fees::Bounded(BoundedFees {
            mode: FeesMode::Linear,
            max_change: 2_000,
            swap: 30,
            add_liquidity: 20,
            remove_liquidity: 20,
            open_position: 10,
            close_position: 10,
            liquidation: 50,
        }),
        ratios: TokenRatios {
            target: 5_000,
            min: 0,
            max: 10_000,
        },
    }
}
