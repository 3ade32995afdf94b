pub use solana_program::native_token::LAMPORTS_PER_SOL;

pub const SEED_LOTTERY: &[u8] = b"lottery";
pub const SEED_HOLDER_REGISTRY: &[u8] = b"holder_registry";
pub const SEED_REWARD_BOOK: &[u8] = b"reward_book";

/// One ticket per this many whole tokens held; every holder gets at least one.
pub const TICKET_UNIT: u64 = 1_000;
/// Registry capacity. A list this size exceeds one transaction, so
/// `sync_holders` pushes snapshots in pages.
pub const MAX_HOLDERS: usize = 100;
/// Audit ring of past rewards kept on-chain.
pub const MAX_REWARDS: usize = 50;

/// Seconds between scheduled slot draws.
pub const SCHEDULED_DRAW_INTERVAL: i64 = 300;
/// Lightning strikes re-arm with a random delay inside this window (seconds).
pub const LIGHTNING_DELAY_MIN: i64 = 30;
pub const LIGHTNING_DELAY_MAX: i64 = 240;
/// Weather transitions re-arm inside this window (seconds).
pub const WEATHER_INTERVAL_MIN: i64 = 600;
pub const WEATHER_INTERVAL_MAX: i64 = 1_800;

/// Basis-point precision for weather multipliers (10_000 = 1.0x).
pub const BPS_ONE: u64 = 10_000;
pub const SUNNY_MULTIPLIER_BPS: u64 = 10_000;
pub const RAINY_MULTIPLIER_BPS: u64 = 15_000;
pub const STORM_MULTIPLIER_BPS: u64 = 30_000;
// Weather weights out of 100; Storm takes the remainder.
pub const WEATHER_WEIGHT_SUNNY: u64 = 60;
pub const WEATHER_WEIGHT_RAINY: u64 = 25;

// Symbol tier weights out of 100; legendary takes the remainder.
pub const TIER_WEIGHT_COMMON: u64 = 70;
pub const TIER_WEIGHT_RARE: u64 = 25;

/// Scheduled draws pay out a tenth of the pool, capped at 1 SOL base.
pub const SCHEDULED_POOL_DIVISOR: u64 = 10;
pub const SCHEDULED_BASE_CAP: u64 = LAMPORTS_PER_SOL;
/// Lightning strikes pay a twentieth, capped at 0.5 SOL base.
pub const LIGHTNING_POOL_DIVISOR: u64 = 20;
pub const LIGHTNING_BASE_CAP: u64 = LAMPORTS_PER_SOL / 2;
/// Lightning prizes below this are dust and the strike is dropped.
pub const LIGHTNING_MIN_PRIZE: u64 = LAMPORTS_PER_SOL / 100;
