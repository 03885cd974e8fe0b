pub mod admin_instruction;
pub mod custody;
pub mod fees;
pub mod multisig;
pub mod oracle;
pub mod pool;
pub mod protocol_config;

pub use admin_instruction::*;
pub use custody::*;
pub use fees::*;
pub use multisig::*;
pub use oracle::*;
pub use pool::*;
pub use protocol_config::*;
