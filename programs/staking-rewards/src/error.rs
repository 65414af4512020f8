use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Cannot stake 0")]
    InvalidStakeAmount = 0,

    #[msg("Cannot withdraw 0")]
    InvalidUnstakeAmount,

    #[msg("Insufficient amount")]
    InsufficientBalance,

    #[msg("Asset transfer was rejected")]
    TransferFailed,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Reward rate must be between 1 and MAX_REWARD_RATE")]
    InvalidRewardRate,

    #[msg("Cannot fund 0 reward tokens")]
    InvalidFundingAmount,

    #[msg("Cannot approve 0 receipt tokens")]
    InvalidApprovalAmount,

    #[msg("Insufficient receipt balance in your account!")]
    InsufficientReceiptBalance,

    #[msg("Name cannot be empty")]
    NameEmpty,

    #[msg("Name is too long")]
    NameTooLong,

    #[msg("Symbol cannot be empty")]
    SymbolEmpty,

    #[msg("Symbol is too long")]
    SymbolTooLong,

    #[msg("URI cannot be empty")]
    UriEmpty,

    #[msg("URI is too long")]
    UriTooLong,

    #[msg("URI must start with https:// or ipfs://")]
    InvalidUriFormat,
}
