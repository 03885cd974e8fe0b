use anchor_lang::{prelude::Pubkey, solana_program::bpf_loader_upgradeable};
use perpetuals::{
    CUSTODY_SEED, MULTISIG_SEED, POOL_SEED, PROTOCOL_CONFIG_SEED, TRANSFER_AUTHORITY_SEED,
};

pub fn get_multisig_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MULTISIG_SEED], &perpetuals::id())
}

pub fn get_protocol_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROTOCOL_CONFIG_SEED], &perpetuals::id())
}

pub fn get_transfer_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TRANSFER_AUTHORITY_SEED], &perpetuals::id())
}

pub fn get_program_data_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[perpetuals::id().as_ref()], &bpf_loader_upgradeable::id())
}

pub fn get_pool_pda(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, name.as_bytes()], &perpetuals::id())
}

pub fn get_custody_pda(pool: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CUSTODY_SEED, pool.as_ref(), mint.as_ref()],
        &perpetuals::id(),
    )
}
