use anchor_lang::prelude::*;

/// Pool-wide reward accounting. One per staking mint.
#[account]
#[derive(InitSpace, Default)]
pub struct StakingPool {
    pub admin: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub receipt_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,
    /// Reward units emitted per slot, split across all stakers.
    pub reward_rate: u64,
    pub total_staked: u64,
    /// Cumulative reward per staked unit, scaled by `PRECISION`.
    pub reward_per_token_stored: u128,
    pub last_update_slot: u64,
    pub bump: u8,
    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub receipt_mint_bump: u8,
}

impl StakingPool {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}

/// Per-staker record. An account that was never created reads the same as
/// `StakerPosition::default()`.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct StakerPosition {
    pub owner: Pubkey,
    pub staked: u64,
    /// Rewards checkpointed but not yet paid out.
    pub rewards: u64,
    /// `reward_per_token_stored` at this position's last checkpoint.
    pub user_reward_per_token_paid: u128,
    pub bump: u8,
}

impl StakerPosition {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}
