// Staking Constants

// PDA seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const POSITION_SEED: &[u8] = b"position";
pub const STAKING_VAULT_SEED: &[u8] = b"staking-vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward-vault";
pub const RECEIPT_MINT_SEED: &[u8] = b"receipt-mint";

// Fixed-point scale for reward-per-token values (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

// Reward units emitted per slot across all stakers
pub const DEFAULT_REWARD_RATE: u64 = 10;

// Upper bound on reward_rate. rate * elapsed * PRECISION stays within u128 and
// total emission within u64 for u64::MAX / MAX_REWARD_RATE (~1.8e10) slots.
pub const MAX_REWARD_RATE: u64 = 1_000_000_000;

// Receipt metadata limits
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
