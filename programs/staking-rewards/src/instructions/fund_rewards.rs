use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsFunded;
use crate::state::StakingPool;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct FundRewards<'info> {
    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(
        mut,
        token::mint = pool.reward_mint,
        token::authority = funder
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = pool.reward_vault
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidFundingAmount);

    require!(
        amount <= ctx.accounts.funder_token_account.amount,
        StakingError::TransferFailed
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };

    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts);

    token::transfer(cpi_context, amount)?;

    let clock = Clock::get()?;

    emit!(RewardsFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        slot: clock.slot,
    });

    msg!("✅ Reward vault funded!");
    msg!("Funder: {}", ctx.accounts.funder.key());
    msg!("Amount: {}", amount);

    Ok(())
}
