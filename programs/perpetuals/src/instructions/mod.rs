pub mod add_pool;
pub mod add_token;
pub mod cancel_admin_instruction;
pub mod get_oracle_price;
pub mod init;
pub mod remove_pool;
pub mod remove_token;
pub mod set_admin_signers;
pub mod set_permissions;
pub mod set_protocol_fee_share;
pub mod set_test_oracle_price;
pub mod set_test_time;
pub mod set_token_config;
pub mod withdraw_fees;

pub use add_pool::*;
pub use add_token::*;
pub use cancel_admin_instruction::*;
pub use get_oracle_price::*;
pub use init::*;
pub use remove_pool::*;
pub use remove_token::*;
pub use set_admin_signers::*;
pub use set_permissions::*;
pub use set_protocol_fee_share::*;
pub use set_test_oracle_price::*;
pub use set_test_time::*;
pub use set_token_config::*;
pub use withdraw_fees::*;
