use crate::assets::RewardVault;
use crate::constants::*;
use crate::events::RewardPaid;
use crate::ledger::RewardLedger;
use crate::state::{StakerPosition, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

#[derive(Accounts)]
pub struct GetReward<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, StakingPool>>,

    // Omitted when the user never staked; nothing is owed then
    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = position.bump
    )]
    pub position: Option<Account<'info, StakerPosition>>,

    #[account(address = pool.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = reward_mint,
        associated_token::authority = user
    )]
    pub user_reward_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.reward_vault
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<GetReward>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;
    let user = accounts.user.key();

    let staking_mint = accounts.pool.staking_mint;
    let pool_bump = [accounts.pool.bump];
    let seeds: &[&[u8]] = &[POOL_SEED, staking_mint.as_ref(), &pool_bump];
    let signer: &[&[&[u8]]] = &[seeds];

    let mut reward_asset = RewardVault {
        token_program: &accounts.token_program,
        vault: &accounts.reward_vault,
        user_reward_account: &accounts.user_reward_account,
        pool: accounts.pool.to_account_info(),
        signer_seeds: signer,
    };

    let mut empty = StakerPosition::default();
    let position = accounts.position.as_deref_mut().unwrap_or(&mut empty);
    let paid = RewardLedger::new(&mut accounts.pool, &clock).get_reward(
        position,
        &user,
        &mut reward_asset,
    )?;

    if paid > 0 {
        emit!(RewardPaid {
            user,
            amount: paid,
            slot: clock.slot,
        });

        msg!("Rewards claimed successfully!");
        msg!("User: {}", user);
        msg!("Amount claimed: {}", paid);
    } else {
        msg!("No rewards to claim");
    }

    Ok(())
}
