use anchor_lang::prelude::*;
use instructions::*;

declare_id!("5kT9wCgqLxkQJZrHmY3v8ePdN1aRfBuS7oXcEjW2tGnV");

pub mod assets;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

#[program]
pub mod staking_rewards {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, reward_rate: u64) -> Result<()> {
        instructions::initialize::handler(ctx, reward_rate)
    }

    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    pub fn create_receipt_metadata(
        ctx: Context<CreateReceiptMetadata>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::create_receipt_metadata::handler(ctx, name, symbol, uri)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    pub fn approve_receipt_burn(ctx: Context<ApproveReceiptBurn>, amount: u64) -> Result<()> {
        instructions::approve_receipt_burn::handler(ctx, amount)
    }

    pub fn revoke_receipt_burn(ctx: Context<RevokeReceiptBurn>) -> Result<()> {
        instructions::revoke_receipt_burn::handler(ctx)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    pub fn get_reward(ctx: Context<GetReward>) -> Result<()> {
        instructions::get_reward::handler(ctx)
    }

    pub fn earned(ctx: Context<ViewPosition>) -> Result<u64> {
        instructions::views::earned_handler(ctx)
    }

    pub fn reward_per_token(ctx: Context<ViewPool>) -> Result<u128> {
        instructions::views::reward_per_token_handler(ctx)
    }
}
