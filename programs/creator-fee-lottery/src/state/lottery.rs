use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{DrawKind, HolderRegistry, RewardBook};
use crate::utils::{
    evaluate_symbols, pick_winner, prize_amount, roll_symbols, seed_interval, seed_percent,
    seed_u64, OutcomeTier, Symbol,
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherKind {
    Sunny,
    Rainy,
    Storm,
}

impl WeatherKind {
    pub fn multiplier_bps(&self) -> u64 {
        match self {
            WeatherKind::Sunny => SUNNY_MULTIPLIER_BPS,
            WeatherKind::Rainy => RAINY_MULTIPLIER_BPS,
            WeatherKind::Storm => STORM_MULTIPLIER_BPS,
        }
    }
}

/// The active weather. Exactly one at a time, replaced wholesale on every
/// transition, never partially mutated.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherState {
    pub kind: WeatherKind,
    pub multiplier_bps: u64,
    pub started_at: i64,
    pub duration_secs: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default)]
pub struct LotteryStats {
    pub draws_held: u64,
    pub draws_skipped: u64,
    pub wins: u64,
    pub rewards_confirmed: u64,
    pub total_paid_lamports: u64,
    pub total_fees_claimed_lamports: u64,
}

/// Why a draw tick did nothing. Skips are normal operation, not errors.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// An earlier reward is still Pending or Failed.
    RoundGateClosed,
    /// Registry empty, zero tickets, or a paged snapshot still in flight.
    NoEligibleHolders,
    /// Pool shows a balance that was not reconfirmed this fee cycle.
    StaleFunds,
    EmptyPool,
}

/// Outcome of one draw evaluation, win or not, for the caller to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawResult {
    Skipped(SkipReason),
    NoWin {
        symbols: Option<[Symbol; 3]>,
    },
    Win {
        reward_id: u64,
        winner: Pubkey,
        prize_lamports: u64,
        /// None for lightning strikes, which have no reel evaluation.
        tier: Option<OutcomeTier>,
        symbols: Option<[Symbol; 3]>,
    },
}

/// The lottery root account: run state, fee accumulator, weather, crank
/// schedule and aggregate stats. The pool field stores bookkeeping only;
/// the claimed SOL itself stays in the creator wallet that pays winners.
#[account]
#[derive(InitSpace)]
pub struct Lottery {
    pub bump: u8,
    pub authority: Pubkey,
    /// Mint of the token whose holders play.
    pub token_mint: Pubkey,
    pub is_running: bool,

    /// Lamports confirmed claimable in the current fee cycle.
    pub pool_lamports: u64,
    /// True only between a successful fee claim and the draw that spends it.
    pub has_fresh_funds: bool,

    pub weather: WeatherState,

    /// Unix timestamps gating each crank; zero while stopped.
    pub next_scheduled_draw_ts: i64,
    pub next_lightning_draw_ts: i64,
    pub next_weather_ts: i64,

    /// Committed Switchboard randomness account, single-use.
    pub randomness_account: Pubkey,

    pub stats: LotteryStats,
}

impl Lottery {
    /// A fee cycle confirmed this absolute amount as claimable. Absolute,
    /// not additive: each cycle reports the total it actually pulled.
    pub fn record_claim(&mut self, amount: u64) {
        self.pool_lamports = amount;
        self.has_fresh_funds = true;
        self.stats.total_fees_claimed_lamports =
            self.stats.total_fees_claimed_lamports.saturating_add(amount);
    }

    /// A fee cycle found nothing claimable. The pool must never survive a
    /// cycle boundary without explicit reconfirmation.
    pub fn reset_if_unfunded(&mut self) {
        self.pool_lamports = 0;
        self.has_fresh_funds = false;
    }

    /// A draw decided to spend the current batch. The pool amount stays for
    /// reward bookkeeping and is reduced as rewards confirm.
    pub fn consume_fee_batch(&mut self) {
        self.has_fresh_funds = false;
    }

    /// A reward was confirmed paid: reduce the pool and roll up stats.
    pub fn settle_confirmed(&mut self, amount: u64) {
        self.pool_lamports = self.pool_lamports.saturating_sub(amount);
        self.stats.rewards_confirmed += 1;
        self.stats.total_paid_lamports = self.stats.total_paid_lamports.saturating_add(amount);
    }

    /// Pool net of rewards not yet settled, the balance read surfaces show.
    /// Lamports promised to a winner stop being advertised the moment the
    /// draw commits them, even though the pool field keeps them until the
    /// payout confirms.
    pub fn displayed_pool(&self, book: &RewardBook) -> u64 {
        self.pool_lamports.saturating_sub(book.outstanding_lamports())
    }

    /// Picks the next weather by fixed weights (Sunny 60, Rainy 25, Storm 15)
    /// and re-arms the transition timer with a random interval.
    pub fn transition_weather(&mut self, seed: &[u8; 32], now: i64) -> WeatherState {
        let roll = seed_percent(seed, 0);
        let kind = if roll < WEATHER_WEIGHT_SUNNY {
            WeatherKind::Sunny
        } else if roll < WEATHER_WEIGHT_SUNNY + WEATHER_WEIGHT_RAINY {
            WeatherKind::Rainy
        } else {
            WeatherKind::Storm
        };
        let interval = seed_interval(seed, 8, WEATHER_INTERVAL_MIN, WEATHER_INTERVAL_MAX);
        self.weather = WeatherState {
            kind,
            multiplier_bps: kind.multiplier_bps(),
            started_at: now,
            duration_secs: interval,
        };
        self.next_weather_ts = now + interval;
        self.weather
    }

    /// One draw evaluation, shared by scheduled, lightning and forced draws.
    /// Preconditions are checked in gate order; any miss is a skip, never an
    /// error. A win opens a Pending reward and consumes the fee batch so the
    /// same claimed funds cannot back a second draw.
    pub fn execute_draw(
        &mut self,
        registry: &HolderRegistry,
        book: &mut RewardBook,
        kind: DrawKind,
        seed: &[u8; 32],
        now: i64,
    ) -> Result<DrawResult> {
        if !book.can_start_new_round() {
            self.stats.draws_skipped += 1;
            return Ok(DrawResult::Skipped(SkipReason::RoundGateClosed));
        }
        if registry.sync_in_progress || registry.holders.is_empty() || registry.total_tickets == 0 {
            self.stats.draws_skipped += 1;
            return Ok(DrawResult::Skipped(SkipReason::NoEligibleHolders));
        }
        if !self.has_fresh_funds {
            self.stats.draws_skipped += 1;
            return Ok(DrawResult::Skipped(if self.pool_lamports > 0 {
                SkipReason::StaleFunds
            } else {
                SkipReason::EmptyPool
            }));
        }
        if self.pool_lamports == 0 {
            self.stats.draws_skipped += 1;
            return Ok(DrawResult::Skipped(SkipReason::EmptyPool));
        }

        self.stats.draws_held += 1;

        let (symbols, tier, tier_multiplier) = match kind {
            DrawKind::Scheduled => {
                let symbols = roll_symbols(seed);
                let tier = evaluate_symbols(&symbols);
                if tier == OutcomeTier::NoWin {
                    return Ok(DrawResult::NoWin {
                        symbols: Some(symbols),
                    });
                }
                (Some(symbols), Some(tier), tier.multiplier())
            }
            // Lightning strikes skip the reels: a strike that passes the
            // funding gates always pays, at base size.
            DrawKind::Lightning => (None, None, 1),
        };

        let prize = prize_amount(
            self.pool_lamports,
            kind,
            tier_multiplier,
            self.weather.multiplier_bps,
        )?;
        let min_prize = match kind {
            DrawKind::Scheduled => 1,
            DrawKind::Lightning => LIGHTNING_MIN_PRIZE,
        };
        if prize < min_prize {
            return Ok(DrawResult::NoWin { symbols });
        }

        let roll = seed_u64(seed, 8);
        let winner_index = match pick_winner(&registry.holders, registry.total_tickets, roll) {
            Some(index) => index,
            None => {
                return Ok(DrawResult::NoWin { symbols });
            }
        };
        let winner = registry.holders[winner_index].wallet;

        let reward_id = book.open(winner, prize, kind, now)?;
        self.consume_fee_batch();
        self.stats.wins += 1;

        Ok(DrawResult::Win {
            reward_id,
            winner,
            prize_lamports: prize,
            tier,
            symbols,
        })
    }
}
