pub mod test_add_pool;
pub mod test_remove_pool;
pub mod test_remove_token;
pub mod test_set_admin_signers;
pub mod test_withdraw_fees;

pub use test_add_pool::*;
pub use test_add_token::*;
pub use test_init::*;
pub use test_remove_pool::*;
pub use test_remove_token::*;
pub use test_set_admin_signers::*;
pub use test_withdraw_fees::*;
