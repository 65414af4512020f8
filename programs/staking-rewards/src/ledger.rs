//! Proportional reward accounting for a staking pool.
//!
//! Rewards accrue per slot at `reward_rate` and are split across stakers in
//! proportion to their stake through a global accumulator:
//!
//! ```text
//! reward_per_token = stored + (now - last_update_slot) * reward_rate * PRECISION / total_staked
//! earned           = staked * (reward_per_token - user_paid) / PRECISION + rewards
//! ```
//!
//! Every mutating operation checkpoints the caller first so rewards accrued
//! under the old stake are never lost. The checkpoint is staged and only
//! written once all asset calls of the operation have succeeded.

use crate::assets::{ReceiptAsset, RewardAsset, SlotClock, StakeAsset};
use crate::constants::{MAX_REWARD_RATE, PRECISION};
use crate::error::StakingError;
use crate::state::{StakerPosition, StakingPool};
use anchor_lang::prelude::*;

/// Accumulator and position rewards brought current to `slot`, not yet
/// written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub reward_per_token: u128,
    pub slot: u64,
    pub rewards: u64,
}

pub struct RewardLedger<'a, C: SlotClock> {
    pool: &'a mut StakingPool,
    clock: &'a C,
}

impl<'a, C: SlotClock> RewardLedger<'a, C> {
    pub fn new(pool: &'a mut StakingPool, clock: &'a C) -> Self {
        Self { pool, clock }
    }

    /// Resets reward accounting and fixes the emission rate.
    pub fn open(&mut self, reward_rate: u64) -> Result<()> {
        require!(
            reward_rate > 0 && reward_rate <= MAX_REWARD_RATE,
            StakingError::InvalidRewardRate
        );

        self.pool.reward_rate = reward_rate;
        self.pool.total_staked = 0;
        self.pool.reward_per_token_stored = 0;
        self.pool.last_update_slot = self.clock.current_slot();
        Ok(())
    }

    pub fn total_supply(&self) -> u64 {
        self.pool.total_staked
    }

    pub fn reward_rate(&self) -> u64 {
        self.pool.reward_rate
    }

    pub fn reward_per_token_stored(&self) -> u128 {
        self.pool.reward_per_token_stored
    }

    pub fn last_update_slot(&self) -> u64 {
        self.pool.last_update_slot
    }

    pub fn reward_per_token(&self) -> Result<u128> {
        reward_per_token(self.pool, self.clock.current_slot())
    }

    pub fn earned(&self, position: &StakerPosition) -> Result<u64> {
        earned(position, self.reward_per_token()?)
    }

    pub fn checkpoint(&self, position: &StakerPosition) -> Result<Checkpoint> {
        let slot = self.clock.current_slot();
        let reward_per_token = reward_per_token(self.pool, slot)?;
        let rewards = earned(position, reward_per_token)?;

        Ok(Checkpoint {
            reward_per_token,
            slot,
            rewards,
        })
    }

    fn commit(&mut self, position: &mut StakerPosition, checkpoint: &Checkpoint) {
        self.pool.reward_per_token_stored = checkpoint.reward_per_token;
        self.pool.last_update_slot = checkpoint.slot;
        position.rewards = checkpoint.rewards;
        position.user_reward_per_token_paid = checkpoint.reward_per_token;
    }

    pub fn stake<S: StakeAsset, R: ReceiptAsset>(
        &mut self,
        position: &mut StakerPosition,
        staker: &Pubkey,
        amount: u64,
        stake_asset: &mut S,
        receipt_asset: &mut R,
    ) -> Result<()> {
        require!(amount > 0, StakingError::InvalidStakeAmount);

        let checkpoint = self.checkpoint(position)?;
        let total_staked = self
            .pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        let staked = position
            .staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        stake_asset.transfer_in(staker, amount)?;
        receipt_asset.mint_to(staker, amount)?;

        self.commit(position, &checkpoint);
        self.pool.total_staked = total_staked;
        position.staked = staked;
        Ok(())
    }

    pub fn unstake<S: StakeAsset, R: ReceiptAsset>(
        &mut self,
        position: &mut StakerPosition,
        staker: &Pubkey,
        amount: u64,
        stake_asset: &mut S,
        receipt_asset: &mut R,
    ) -> Result<()> {
        require!(amount > 0, StakingError::InvalidUnstakeAmount);
        require!(amount <= position.staked, StakingError::InsufficientBalance);

        let checkpoint = self.checkpoint(position)?;
        let total_staked = self
            .pool
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        let staked = position.staked - amount;

        // Burning the receipt is what authorizes the withdrawal.
        receipt_asset.burn_from(staker, amount)?;
        stake_asset.transfer_out(staker, amount)?;

        self.commit(position, &checkpoint);
        self.pool.total_staked = total_staked;
        position.staked = staked;
        Ok(())
    }

    /// Pays out everything the position has earned. Returns the amount paid,
    /// which is 0 when nothing was owed.
    pub fn get_reward<R: RewardAsset>(
        &mut self,
        position: &mut StakerPosition,
        staker: &Pubkey,
        reward_asset: &mut R,
    ) -> Result<u64> {
        let mut checkpoint = self.checkpoint(position)?;
        let owed = checkpoint.rewards;

        if owed > 0 {
            reward_asset.transfer_out(staker, owed)?;
            checkpoint.rewards = 0;
        }

        self.commit(position, &checkpoint);
        Ok(owed)
    }
}

/// Live accumulator value at `now`. Frozen while nothing is staked.
pub fn reward_per_token(pool: &StakingPool, now: u64) -> Result<u128> {
    if pool.total_staked == 0 {
        return Ok(pool.reward_per_token_stored);
    }

    let elapsed = now.saturating_sub(pool.last_update_slot);
    let accrued = (elapsed as u128)
        .checked_mul(pool.reward_rate as u128)
        .and_then(|v| v.checked_mul(PRECISION))
        .ok_or(StakingError::MathOverflow)?
        / pool.total_staked as u128;

    pool.reward_per_token_stored
        .checked_add(accrued)
        .ok_or_else(|| error!(StakingError::MathOverflow))
}

/// Rewards owed to `position` against the given accumulator value.
pub fn earned(position: &StakerPosition, reward_per_token: u128) -> Result<u64> {
    let delta = reward_per_token
        .checked_sub(position.user_reward_per_token_paid)
        .ok_or(StakingError::MathOverflow)?;
    let pending = (position.staked as u128)
        .checked_mul(delta)
        .ok_or(StakingError::MathOverflow)?
        / PRECISION;
    let total = pending
        .checked_add(position.rewards as u128)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(total).map_err(|_| error!(StakingError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(total_staked: u64, reward_rate: u64, stored: u128, last_update_slot: u64) -> StakingPool {
        StakingPool {
            reward_rate,
            total_staked,
            reward_per_token_stored: stored,
            last_update_slot,
            ..StakingPool::default()
        }
    }

    fn position(staked: u64, rewards: u64, paid: u128) -> StakerPosition {
        StakerPosition {
            staked,
            rewards,
            user_reward_per_token_paid: paid,
            ..StakerPosition::default()
        }
    }

    #[test]
    fn reward_per_token_frozen_when_nothing_staked() {
        let pool = pool(0, 10, 42, 5);
        assert_eq!(reward_per_token(&pool, 1_000).unwrap(), 42);
    }

    #[test]
    fn reward_per_token_accrues_per_slot() {
        // 10 units/slot, 3 slots, 100 staked: 30 * 1e18 / 100
        let pool = pool(100, 10, 0, 7);
        assert_eq!(reward_per_token(&pool, 10).unwrap(), 3 * PRECISION / 10);
    }

    #[test]
    fn reward_per_token_adds_to_stored() {
        let pool = pool(1_000, 10, PRECISION, 0);
        assert_eq!(reward_per_token(&pool, 100).unwrap(), 2 * PRECISION);
    }

    #[test]
    fn reward_per_token_overflow_is_an_error() {
        let pool = pool(1, u64::MAX, 0, 0);
        assert!(reward_per_token(&pool, u64::MAX).is_err());
    }

    #[test]
    fn capped_rate_accrues_without_overflow_over_horizon() {
        use crate::constants::MAX_REWARD_RATE;

        let horizon = u64::MAX / MAX_REWARD_RATE;
        let pool = pool(1, MAX_REWARD_RATE, 0, 0);
        let rpt = reward_per_token(&pool, horizon).unwrap();
        assert_eq!(
            earned(&position(1, 0, 0), rpt).unwrap(),
            horizon * MAX_REWARD_RATE
        );
    }

    #[test]
    fn earned_only_counts_accrual_since_snapshot() {
        assert_eq!(earned(&position(500, 50, 100), 100).unwrap(), 50);
        assert_eq!(earned(&position(1_000, 0, 0), PRECISION).unwrap(), 1_000);
        assert_eq!(earned(&position(1_000, 7, PRECISION), 3 * PRECISION).unwrap(), 2_007);
    }

    #[test]
    fn earned_truncates_fractional_units() {
        // 3 staked at 0.5 per token = 1.5, floor to 1
        assert_eq!(earned(&position(3, 0, 0), PRECISION / 2).unwrap(), 1);
    }

    #[test]
    fn earned_rejects_snapshot_ahead_of_accumulator() {
        assert!(earned(&position(10, 0, 2), 1).is_err());
    }

    #[test]
    fn earned_result_must_fit_in_u64() {
        let huge = position(u64::MAX, u64::MAX, 0);
        assert!(earned(&huge, PRECISION).is_err());
    }
}
