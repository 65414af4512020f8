//! Asset ledgers and the slot clock the reward ledger depends on.
//!
//! The traits are the only surface `RewardLedger` sees. On chain they are
//! backed by SPL Token CPIs signed by the pool PDA; tests back them with
//! in-memory balances.

use crate::error::StakingError;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

/// The token users stake.
pub trait StakeAsset {
    /// Moves `amount` from `from` into pool custody.
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` from pool custody back to `to`.
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Proof-of-stake shares, minted 1:1 on stake and burned on unstake.
pub trait ReceiptAsset {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    /// Fails unless `from` holds and has approved at least `amount`.
    fn burn_from(&mut self, from: &Pubkey, amount: u64) -> Result<()>;
}

/// The token rewards are paid in.
pub trait RewardAsset {
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Monotonic discrete time source.
pub trait SlotClock {
    fn current_slot(&self) -> u64;
}

impl SlotClock for Clock {
    fn current_slot(&self) -> u64 {
        self.slot
    }
}

pub struct StakeVault<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub user_token_account: &'a Account<'info, TokenAccount>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub user: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl StakeAsset for StakeVault<'_, '_> {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.user_token_account.owner, *from, StakingError::TransferFailed);
        require!(
            self.user_token_account.amount >= amount,
            StakingError::TransferFailed
        );

        let cpi_accounts = Transfer {
            from: self.user_token_account.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.user.clone(),
        };

        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        token::transfer(cpi_ctx, amount)
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.user_token_account.owner, *to, StakingError::TransferFailed);
        require!(self.vault.amount >= amount, StakingError::TransferFailed);

        let cpi_accounts = Transfer {
            from: self.vault.to_account_info(),
            to: self.user_token_account.to_account_info(),
            authority: self.pool.clone(),
        };

        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        token::transfer(cpi_ctx, amount)
    }
}

pub struct ReceiptMint<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub mint: &'a Account<'info, Mint>,
    pub user_receipt_account: &'a Account<'info, TokenAccount>,
    pub pool: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl ReceiptAsset for ReceiptMint<'_, '_> {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.user_receipt_account.owner, *to, StakingError::TransferFailed);

        let cpi_accounts = MintTo {
            mint: self.mint.to_account_info(),
            to: self.user_receipt_account.to_account_info(),
            authority: self.pool.clone(),
        };

        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        token::mint_to(cpi_ctx, amount)
    }

    fn burn_from(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        let receipt = self.user_receipt_account;
        require_keys_eq!(receipt.owner, *from, StakingError::TransferFailed);
        require!(receipt.amount >= amount, StakingError::TransferFailed);

        // The pool burns as the approved delegate, so the user must have
        // called approve_receipt_burn for at least `amount` beforehand.
        require!(
            receipt.delegate == COption::Some(*self.pool.key),
            StakingError::TransferFailed
        );
        require!(
            receipt.delegated_amount >= amount,
            StakingError::TransferFailed
        );

        let cpi_accounts = Burn {
            mint: self.mint.to_account_info(),
            from: receipt.to_account_info(),
            authority: self.pool.clone(),
        };

        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        token::burn(cpi_ctx, amount)
    }
}

pub struct RewardVault<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub user_reward_account: &'a Account<'info, TokenAccount>,
    pub pool: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl RewardAsset for RewardVault<'_, '_> {
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.user_reward_account.owner, *to, StakingError::TransferFailed);
        require!(self.vault.amount >= amount, StakingError::TransferFailed);

        let cpi_accounts = Transfer {
            from: self.vault.to_account_info(),
            to: self.user_reward_account.to_account_info(),
            authority: self.pool.clone(),
        };

        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        token::transfer(cpi_ctx, amount)
    }
}
