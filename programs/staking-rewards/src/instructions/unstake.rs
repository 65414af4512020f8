use crate::assets::{ReceiptMint, StakeVault};
use crate::constants::*;
use crate::events::Unstaked;
use crate::ledger::RewardLedger;
use crate::state::{StakerPosition, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, StakingPool>>,

    // Omitted when the user never staked; the ledger then rejects the
    // amount as zero or overdrawn
    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = position.bump
    )]
    pub position: Option<Account<'info, StakerPosition>>,

    // Destination for the returned stake
    #[account(
        mut,
        token::mint = pool.staking_mint,
        token::authority = user
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.staking_vault
    )]
    pub staking_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.receipt_mint
    )]
    pub receipt_mint: Box<Account<'info, Mint>>,

    // Must have approved the pool as delegate for the burned amount
    #[account(
        mut,
        token::mint = receipt_mint,
        token::authority = user
    )]
    pub user_receipt_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;
    let user = accounts.user.key();

    let staking_mint = accounts.pool.staking_mint;
    let pool_bump = [accounts.pool.bump];
    let seeds: &[&[u8]] = &[POOL_SEED, staking_mint.as_ref(), &pool_bump];
    let signer: &[&[&[u8]]] = &[seeds];
    let pool_info = accounts.pool.to_account_info();

    let mut stake_asset = StakeVault {
        token_program: &accounts.token_program,
        user_token_account: &accounts.user_token_account,
        vault: &accounts.staking_vault,
        user: accounts.user.to_account_info(),
        pool: pool_info.clone(),
        signer_seeds: signer,
    };
    let mut receipt_asset = ReceiptMint {
        token_program: &accounts.token_program,
        mint: &accounts.receipt_mint,
        user_receipt_account: &accounts.user_receipt_account,
        pool: pool_info,
        signer_seeds: signer,
    };

    let mut empty = StakerPosition::default();
    let position = accounts.position.as_deref_mut().unwrap_or(&mut empty);
    let mut ledger = RewardLedger::new(&mut accounts.pool, &clock);
    ledger.unstake(position, &user, amount, &mut stake_asset, &mut receipt_asset)?;
    let total_staked = ledger.total_supply();

    emit!(Unstaked {
        user,
        amount,
        total_staked,
        slot: clock.slot,
    });

    msg!("✅ Tokens unstaked successfully!");
    msg!("User: {}", user);
    msg!("Amount: {}", amount);
    msg!("Position staked: {}", position.staked);
    msg!("Pending rewards: {}", position.rewards);
    Ok(())
}
