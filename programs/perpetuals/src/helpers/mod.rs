pub mod accounts;
pub mod admin;
pub mod clock;
pub mod math;

pub use admin::*;
