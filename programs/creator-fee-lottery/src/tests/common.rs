//! Shared fixtures: in-memory accounts and deterministic seeds.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{
    HolderBalance, HolderRegistry, Lottery, LotteryStats, RewardBook, WeatherKind, WeatherState,
};

pub fn running_lottery() -> Lottery {
    Lottery {
        bump: 255,
        authority: Pubkey::new_unique(),
        token_mint: Pubkey::new_unique(),
        is_running: true,
        pool_lamports: 0,
        has_fresh_funds: false,
        weather: WeatherState {
            kind: WeatherKind::Sunny,
            multiplier_bps: SUNNY_MULTIPLIER_BPS,
            started_at: 0,
            duration_secs: 0,
        },
        next_scheduled_draw_ts: 0,
        next_lightning_draw_ts: 0,
        next_weather_ts: 0,
        randomness_account: Pubkey::default(),
        stats: LotteryStats::default(),
    }
}

pub fn registry_with(balances: &[(Pubkey, u64)]) -> HolderRegistry {
    let mut registry = HolderRegistry {
        bump: 255,
        updated_at: 0,
        total_tickets: 0,
        sync_in_progress: false,
        holders: Vec::new(),
    };
    let snapshot = balances
        .iter()
        .map(|&(wallet, token_balance)| HolderBalance {
            wallet,
            token_balance,
        })
        .collect();
    registry.replace(snapshot, 0).unwrap();
    registry
}

pub fn empty_book() -> RewardBook {
    RewardBook {
        bump: 255,
        next_id: 0,
        rewards: Vec::new(),
    }
}

pub fn seed_with(bytes: &[(usize, u8)]) -> [u8; 32] {
    let mut seed = [0u8; 32];
    for &(i, b) in bytes {
        seed[i] = b;
    }
    seed
}

/// All-zero seed: three common tier rolls all picking Cherry, a guaranteed
/// triple-common (Medium) win, winner roll 0.
pub fn winning_seed() -> [u8; 32] {
    [0u8; 32]
}

/// Cherry, Apple, Orange: three distinct commons, no bonus pair.
pub fn losing_seed() -> [u8; 32] {
    seed_with(&[(29, 1), (30, 2)])
}

/// Fire, Lightning, Cherry: the bonus pair.
pub fn bonus_seed() -> [u8; 32] {
    seed_with(&[(16, 70), (20, 70), (29, 1)])
}

/// Crown, Crown, Crown.
pub fn jackpot_seed() -> [u8; 32] {
    seed_with(&[(16, 95), (20, 95), (24, 95)])
}

/// Winning seed with a chosen winner-selection roll.
pub fn winning_seed_with_roll(roll: u64) -> [u8; 32] {
    let mut seed = winning_seed();
    seed[8..16].copy_from_slice(&roll.to_le_bytes());
    seed
}
