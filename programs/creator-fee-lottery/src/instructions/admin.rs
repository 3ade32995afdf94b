use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{LotteryStarted, LotteryStopped};
use crate::state::{HolderRegistry, Lottery, LotteryStats, RewardBook, WeatherKind, WeatherState};
use crate::utils::seed_interval;

/// Accounts to create the lottery PDA set for one tracked token.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [SEED_LOTTERY],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        init,
        payer = payer,
        space = 8 + HolderRegistry::INIT_SPACE,
        seeds = [SEED_HOLDER_REGISTRY],
        bump
    )]
    pub holder_registry: Box<Account<'info, HolderRegistry>>,

    #[account(
        init,
        payer = payer,
        space = 8 + RewardBook::INIT_SPACE,
        seeds = [SEED_REWARD_BOOK],
        bump
    )]
    pub reward_book: Box<Account<'info, RewardBook>>,

    /// Mint of the token whose holders participate.
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,
}

/// Accounts for authority-only operations touching just the root account.
#[derive(Accounts)]
pub struct UpdateLottery<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_initialize(ctx: Context<InitializeLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let lottery = &mut ctx.accounts.lottery;
    lottery.bump = ctx.bumps.lottery;
    lottery.authority = ctx.accounts.payer.key();
    lottery.token_mint = ctx.accounts.token_mint.key();
    lottery.is_running = false;
    lottery.pool_lamports = 0;
    lottery.has_fresh_funds = false;
    lottery.weather = WeatherState {
        kind: WeatherKind::Sunny,
        multiplier_bps: WeatherKind::Sunny.multiplier_bps(),
        started_at: now,
        duration_secs: 0,
    };
    lottery.next_scheduled_draw_ts = 0;
    lottery.next_lightning_draw_ts = 0;
    lottery.next_weather_ts = 0;
    lottery.randomness_account = Pubkey::default();
    lottery.stats = LotteryStats::default();

    let registry = &mut ctx.accounts.holder_registry;
    registry.bump = ctx.bumps.holder_registry;
    registry.updated_at = now;
    registry.total_tickets = 0;
    registry.sync_in_progress = false;
    registry.holders = Vec::new();

    let book = &mut ctx.accounts.reward_book;
    book.bump = ctx.bumps.reward_book;
    book.next_id = 0;
    book.rewards = Vec::new();

    Ok(())
}

/// Starts the lottery and arms every crank schedule. Idempotent: starting a
/// running lottery leaves its schedule untouched.
pub fn process_start_lottery(ctx: Context<UpdateLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }
    if lottery.is_running {
        msg!("Lottery already running");
        return Ok(());
    }

    lottery.is_running = true;
    lottery.next_scheduled_draw_ts = now + SCHEDULED_DRAW_INTERVAL;
    // No randomness is committed yet, so the first lightning delay and
    // weather interval jitter off the clock; every re-arm after this uses
    // the revealed seed.
    let jitter = clock_jitter(&clock);
    lottery.next_lightning_draw_ts =
        now + seed_interval(&jitter, 0, LIGHTNING_DELAY_MIN, LIGHTNING_DELAY_MAX);
    lottery.next_weather_ts =
        now + seed_interval(&jitter, 8, WEATHER_INTERVAL_MIN, WEATHER_INTERVAL_MAX);
    lottery.weather.started_at = now;

    emit!(LotteryStarted {
        ts: now,
        next_scheduled_draw_ts: lottery.next_scheduled_draw_ts,
        next_lightning_draw_ts: lottery.next_lightning_draw_ts,
    });
    Ok(())
}

/// Stops the lottery and clears every schedule so no further draw, lightning
/// or weather crank can fire. Idempotent.
pub fn process_stop_lottery(ctx: Context<UpdateLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }
    if !lottery.is_running {
        msg!("Lottery already stopped");
        return Ok(());
    }

    lottery.is_running = false;
    lottery.next_scheduled_draw_ts = 0;
    lottery.next_lightning_draw_ts = 0;
    lottery.next_weather_ts = 0;
    lottery.randomness_account = Pubkey::default();

    emit!(LotteryStopped {
        ts: clock.unix_timestamp,
    });
    Ok(())
}

fn clock_jitter(clock: &Clock) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[0..8].copy_from_slice(&(clock.slot ^ clock.unix_timestamp as u64).to_le_bytes());
    bytes[8..16].copy_from_slice(&clock.slot.wrapping_mul(0x9E37_79B9_7F4A_7C15).to_le_bytes());
    bytes
}
