use anchor_lang::prelude::*;

use crate::state::{DrawKind, SkipReason, WeatherKind};
use crate::utils::{OutcomeTier, Symbol};

#[event]
pub struct LotteryStarted {
    pub ts: i64,
    pub next_scheduled_draw_ts: i64,
    pub next_lightning_draw_ts: i64,
}

#[event]
pub struct LotteryStopped {
    pub ts: i64,
}

#[event]
pub struct HoldersSynced {
    pub ts: i64,
    pub holder_count: u64,
    pub total_tickets: u64,
}

#[event]
pub struct FeeClaimRecorded {
    pub ts: i64,
    pub amount_lamports: u64,
}

#[event]
pub struct PoolReset {
    pub ts: i64,
}

#[event]
pub struct WeatherChanged {
    pub ts: i64,
    pub kind: WeatherKind,
    pub multiplier_bps: u64,
    pub duration_secs: i64,
}

/// Emitted for every evaluated draw, win or no-win.
#[event]
pub struct DrawSettled {
    pub ts: i64,
    pub kind: DrawKind,
    pub symbols: Option<[Symbol; 3]>,
    /// None for lightning strikes, which have no reel evaluation.
    pub tier: Option<OutcomeTier>,
    pub winner: Option<Pubkey>,
    pub reward_id: Option<u64>,
    pub prize_lamports: u64,
    pub weather_multiplier_bps: u64,
    /// Pool net of in-flight rewards; a committed prize stops being shown.
    pub pool_display_lamports: u64,
}

/// Emitted when a draw tick did not evaluate (gate, funding or holders).
#[event]
pub struct DrawSkipped {
    pub ts: i64,
    pub kind: DrawKind,
    pub reason: SkipReason,
}

#[event]
pub struct RewardConfirmed {
    pub ts: i64,
    pub reward_id: u64,
    pub winner: Pubkey,
    pub amount_lamports: u64,
    pub round_gate_open: bool,
    pub pool_display_lamports: u64,
}

#[event]
pub struct RewardFailed {
    pub ts: i64,
    pub reward_id: u64,
    pub winner: Pubkey,
    pub amount_lamports: u64,
}

#[event]
pub struct RewardRetried {
    pub ts: i64,
    pub reward_id: u64,
}
