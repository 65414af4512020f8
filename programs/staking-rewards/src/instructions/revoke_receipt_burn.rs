use crate::constants::*;
use crate::state::StakingPool;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Revoke, Token, TokenAccount};

#[derive(Accounts)]
pub struct RevokeReceiptBurn<'info> {
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

pub fn handler(ctx: Context<RevokeReceiptBurn>) -> Result<()> {
    let cpi_accounts = Revoke {
        source: ctx.accounts.receipt_account.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };

    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

    token::revoke(cpi_ctx)?;

    msg!("✅ Receipt burn approval revoked!");
    msg!("Receipt account: {}", ctx.accounts.receipt_account.key());
    Ok(())
}
