use crate::constants::*;
use crate::events::PoolInitialized;
use crate::ledger::RewardLedger;
use crate::state::StakingPool;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = StakingPool::LEN,
        seeds = [POOL_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, StakingPool>>,

    pub staking_mint: Box<Account<'info, Mint>>,

    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        token::mint = staking_mint,
        token::authority = pool,
        seeds = [STAKING_VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub staking_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        token::mint = reward_mint,
        token::authority = pool,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    // Receipt shares mirror the staking token's decimals
    #[account(
        init,
        payer = admin,
        mint::decimals = staking_mint.decimals,
        mint::authority = pool,
        seeds = [RECEIPT_MINT_SEED, pool.key().as_ref()],
        bump
    )]
    pub receipt_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, reward_rate: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    pool.admin = ctx.accounts.admin.key();
    pool.staking_mint = ctx.accounts.staking_mint.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.receipt_mint = ctx.accounts.receipt_mint.key();
    pool.staking_vault = ctx.accounts.staking_vault.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.bump = ctx.bumps.pool;
    pool.staking_vault_bump = ctx.bumps.staking_vault;
    pool.reward_vault_bump = ctx.bumps.reward_vault;
    pool.receipt_mint_bump = ctx.bumps.receipt_mint;

    RewardLedger::new(pool, &clock).open(reward_rate)?;

    emit!(PoolInitialized {
        pool: pool_key,
        admin: pool.admin,
        staking_mint: pool.staking_mint,
        reward_mint: pool.reward_mint,
        receipt_mint: pool.receipt_mint,
        reward_rate,
        slot: clock.slot,
    });

    msg!("Staking pool initialized!");
    msg!("Staking mint: {}", pool.staking_mint);
    msg!("Reward mint: {}", pool.reward_mint);
    msg!("Receipt mint: {}", pool.receipt_mint);
    msg!("Reward rate: {} per slot", reward_rate);
    Ok(())
}
