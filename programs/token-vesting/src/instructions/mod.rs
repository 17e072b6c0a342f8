pub mod initialize_schedule;
pub mod fund_vesting;
pub mod claim_tokens;
pub mod change_receiver;
pub mod kill_vesting;
pub mod emit_vesting_quote;

pub use initialize_schedule::*;
pub use fund_vesting::*;
pub use claim_tokens::*;
pub use change_receiver::*;
pub use kill_vesting::*;
pub use emit_vesting_quote::*;
