#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;
use staking_rewards::assets::{ReceiptAsset, RewardAsset, StakeAsset};
use staking_rewards::error::StakingError;
use staking_rewards::ledger::RewardLedger;
use staking_rewards::state::{StakerPosition, StakingPool};

pub const START_SLOT: u64 = 100;

/// In-memory fungible token: user balances, pool custody, and receipt
/// allowances granted to the pool.
#[derive(Default, Debug)]
pub struct TokenLedger {
    pub balances: HashMap<Pubkey, u64>,
    pub allowances: HashMap<Pubkey, u64>,
    pub custody: u64,
    pub supply: u64,
    pub frozen: bool,
}

impl TokenLedger {
    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    pub fn approve(&mut self, owner: &Pubkey, amount: u64) {
        self.allowances.insert(*owner, amount);
    }

    fn debit(&mut self, owner: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.frozen, StakingError::TransferFailed);
        let balance = self.balance_of(owner);
        require!(balance >= amount, StakingError::TransferFailed);
        self.balances.insert(*owner, balance - amount);
        Ok(())
    }

    fn credit(&mut self, owner: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.frozen, StakingError::TransferFailed);
        *self.balances.entry(*owner).or_default() += amount;
        Ok(())
    }

    fn release(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(self.custody >= amount, StakingError::TransferFailed);
        self.credit(to, amount)?;
        self.custody -= amount;
        Ok(())
    }
}

impl StakeAsset for TokenLedger {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        self.debit(from, amount)?;
        self.custody += amount;
        Ok(())
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        self.release(to, amount)
    }
}

impl RewardAsset for TokenLedger {
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        self.release(to, amount)
    }
}

impl ReceiptAsset for TokenLedger {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        self.credit(to, amount)?;
        self.supply += amount;
        Ok(())
    }

    fn burn_from(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        let allowance = self.allowances.get(from).copied().unwrap_or(0);
        require!(allowance >= amount, StakingError::TransferFailed);
        self.debit(from, amount)?;
        self.allowances.insert(*from, allowance - amount);
        self.supply -= amount;
        Ok(())
    }
}

/// A pool plus its three asset ledgers and a clock the test can advance.
pub struct Harness {
    pub pool: StakingPool,
    pub clock: Clock,
    pub positions: HashMap<Pubkey, StakerPosition>,
    pub stake_token: TokenLedger,
    pub receipt_token: TokenLedger,
    pub reward_token: TokenLedger,
}

impl Harness {
    pub fn new(reward_rate: u64, reward_funding: u64) -> Self {
        let clock = Clock {
            slot: START_SLOT,
            ..Clock::default()
        };
        let mut pool = StakingPool::default();
        RewardLedger::new(&mut pool, &clock)
            .open(reward_rate)
            .expect("open pool");

        let reward_token = TokenLedger {
            custody: reward_funding,
            ..TokenLedger::default()
        };

        Self {
            pool,
            clock,
            positions: HashMap::new(),
            stake_token: TokenLedger::default(),
            receipt_token: TokenLedger::default(),
            reward_token,
        }
    }

    pub fn user(&mut self, balance: u64) -> Pubkey {
        let user = Pubkey::new_unique();
        self.stake_token.balances.insert(user, balance);
        user
    }

    pub fn advance(&mut self, slots: u64) {
        self.clock.slot += slots;
    }

    pub fn stake(&mut self, user: &Pubkey, amount: u64) -> Result<()> {
        let position = self.positions.entry(*user).or_default();
        RewardLedger::new(&mut self.pool, &self.clock).stake(
            position,
            user,
            amount,
            &mut self.stake_token,
            &mut self.receipt_token,
        )
    }

    pub fn approve_receipt_burn(&mut self, user: &Pubkey, amount: u64) {
        self.receipt_token.approve(user, amount);
    }

    pub fn unstake(&mut self, user: &Pubkey, amount: u64) -> Result<()> {
        let position = self.positions.entry(*user).or_default();
        RewardLedger::new(&mut self.pool, &self.clock).unstake(
            position,
            user,
            amount,
            &mut self.stake_token,
            &mut self.receipt_token,
        )
    }

    pub fn get_reward(&mut self, user: &Pubkey) -> Result<u64> {
        let position = self.positions.entry(*user).or_default();
        RewardLedger::new(&mut self.pool, &self.clock).get_reward(
            position,
            user,
            &mut self.reward_token,
        )
    }

    pub fn position(&self, user: &Pubkey) -> StakerPosition {
        self.positions.get(user).cloned().unwrap_or_default()
    }

    pub fn ledger(&mut self) -> RewardLedger<'_, Clock> {
        RewardLedger::new(&mut self.pool, &self.clock)
    }

    pub fn reward_per_token(&mut self) -> u128 {
        self.ledger().reward_per_token().expect("reward per token")
    }

    pub fn earned(&mut self, user: &Pubkey) -> u64 {
        let position = self.position(user);
        self.ledger().earned(&position).expect("earned")
    }

    pub fn staked_sum(&self) -> u64 {
        self.positions.values().map(|p| p.staked).sum()
    }
}

pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
    }
}

pub fn code(err: StakingError) -> u32 {
    ERROR_CODE_OFFSET + err as u32
}
