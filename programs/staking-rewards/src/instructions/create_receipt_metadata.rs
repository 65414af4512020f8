use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakingPool;
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use mpl_token_metadata::instructions::{
    CreateMetadataAccountV3Cpi, CreateMetadataAccountV3CpiAccounts,
    CreateMetadataAccountV3InstructionArgs,
};
use mpl_token_metadata::types::DataV2;

#[derive(Accounts)]
pub struct CreateReceiptMetadata<'info> {
    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump,
        has_one = admin
    )]
    pub pool: Box<Account<'info, StakingPool>>,

    /// CHECK: Metaplex will validate this PDA
    #[account(
        mut,
        seeds = [
            b"metadata",
            token_metadata_program.key().as_ref(),
            receipt_mint.key().as_ref(),
        ],
        bump,
        seeds::program = token_metadata_program.key()
    )]
    pub metadata: UncheckedAccount<'info>,

    #[account(
        mut,
        address = pool.receipt_mint
    )]
    pub receipt_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: This is the Metaplex Token Metadata Program
    #[account(
        address = mpl_token_metadata::ID
    )]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,

    pub rent: Sysvar<'info, Rent>,
}

pub fn validate_metadata(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(!name.is_empty(), StakingError::NameEmpty);
    require!(name.len() <= MAX_NAME_LENGTH, StakingError::NameTooLong);

    require!(!symbol.is_empty(), StakingError::SymbolEmpty);
    require!(symbol.len() <= MAX_SYMBOL_LENGTH, StakingError::SymbolTooLong);

    require!(!uri.is_empty(), StakingError::UriEmpty);
    require!(uri.len() <= MAX_URI_LENGTH, StakingError::UriTooLong);

    let uri_lower = uri.to_lowercase();
    require!(
        uri_lower.starts_with("https://") || uri_lower.starts_with("ipfs://"),
        StakingError::InvalidUriFormat
    );
    Ok(())
}

pub fn handler(
    ctx: Context<CreateReceiptMetadata>,
    name: String,
    symbol: String,
    uri: String,
) -> Result<()> {
    validate_metadata(&name, &symbol, &uri)?;

    msg!("Creating metadata for receipt: {}", ctx.accounts.receipt_mint.key());
    msg!("Name: {}, Symbol: {}, URI: {}", name, symbol, uri);

    let data_v2 = DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    let create_metadata_args = CreateMetadataAccountV3InstructionArgs {
        data: data_v2,
        is_mutable: true,
        collection_details: None,
    };

    // The pool PDA is both mint and update authority
    let staking_mint = ctx.accounts.pool.staking_mint;
    let pool_bump = [ctx.accounts.pool.bump];
    let seeds: &[&[u8]] = &[POOL_SEED, staking_mint.as_ref(), &pool_bump];
    let signer = &[seeds];
    let pool_info = ctx.accounts.pool.to_account_info();

    CreateMetadataAccountV3Cpi::new(
        &ctx.accounts.token_metadata_program.to_account_info(),
        CreateMetadataAccountV3CpiAccounts {
            metadata: &ctx.accounts.metadata.to_account_info(),
            mint: &ctx.accounts.receipt_mint.to_account_info(),
            mint_authority: &pool_info,
            payer: &ctx.accounts.admin.to_account_info(),
            update_authority: (&pool_info, true),
            system_program: &ctx.accounts.system_program.to_account_info(),
            rent: Some(&ctx.accounts.rent.to_account_info()),
        },
        create_metadata_args,
    )
    .invoke_signed(signer)?;

    msg!("✅ Receipt metadata successfully created!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_and_ipfs_uris() {
        assert!(validate_metadata("Staked Token", "STK", "https://example.com/stk.json").is_ok());
        assert!(validate_metadata("Staked Token", "STK", "IPFS://bafy").is_ok());
    }

    #[test]
    fn rejects_bad_metadata() {
        assert!(validate_metadata("", "STK", "https://x").is_err());
        assert!(validate_metadata(&"n".repeat(MAX_NAME_LENGTH + 1), "STK", "https://x").is_err());
        assert!(validate_metadata("Staked", "", "https://x").is_err());
        assert!(validate_metadata("Staked", "TOOLONGSYMB", "https://x").is_err());
        assert!(validate_metadata("Staked", "STK", "").is_err());
        assert!(validate_metadata("Staked", "STK", "http://insecure").is_err());
    }
}
