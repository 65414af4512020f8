use crate::constants::*;
use crate::ledger::RewardLedger;
use crate::state::{StakerPosition, StakingPool};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,
}

#[derive(Accounts)]
pub struct ViewPosition<'info> {
    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,

    // Omitted when the owner never staked; reads as an empty position
    #[account(
        seeds = [POSITION_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = position.bump
    )]
    pub position: Option<Account<'info, StakerPosition>>,

    /// CHECK: only used to derive the position address
    pub owner: UncheckedAccount<'info>,
}

// Reads only. The pool is not writable here, so nothing is persisted.
pub fn reward_per_token_handler(ctx: Context<ViewPool>) -> Result<u128> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;
    RewardLedger::new(&mut accounts.pool, &clock).reward_per_token()
}

pub fn earned_handler(ctx: Context<ViewPosition>) -> Result<u64> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;

    let empty = StakerPosition::default();
    let position = accounts.position.as_deref().unwrap_or(&empty);

    RewardLedger::new(&mut accounts.pool, &clock).earned(position)
}
