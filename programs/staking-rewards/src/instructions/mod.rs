pub mod initialize;
pub mod fund_rewards;
pub mod create_receipt_metadata;
pub mod stake;
pub mod approve_receipt_burn;
pub mod revoke_receipt_burn;
pub mod unstake;
pub mod get_reward;
pub mod views;

pub use initialize::*;
pub use fund_rewards::*;
pub use create_receipt_metadata::*;
pub use stake::*;
pub use approve_receipt_burn::*;
pub use revoke_receipt_burn::*;
pub use unstake::*;
pub use get_reward::*;
pub use views::*;
