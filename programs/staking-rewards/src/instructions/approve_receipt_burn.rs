use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakingPool;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Approve, Token, TokenAccount};

#[derive(Accounts)]
pub struct ApproveReceiptBurn<'info> {
    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(
        mut,
        token::mint = pool.receipt_mint,
        token::authority = owner
    )]
    pub receipt_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ApproveReceiptBurn>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidApprovalAmount);

    require!(
        ctx.accounts.receipt_account.amount >= amount,
        StakingError::InsufficientReceiptBalance
    );

    // The pool PDA becomes the delegate that burns receipts on unstake
    let cpi_accounts = Approve {
        to: ctx.accounts.receipt_account.to_account_info(),
        delegate: ctx.accounts.pool.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };

    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

    token::approve(cpi_ctx, amount)?;

    msg!("✅ Receipt burn approved!");
    msg!("Pool: {}", ctx.accounts.pool.key());
    msg!("Approved amount: {}", amount);
    msg!("Receipt account: {}", ctx.accounts.receipt_account.key());
    Ok(())
}
