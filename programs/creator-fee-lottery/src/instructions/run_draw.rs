use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{DrawSettled, DrawSkipped};
use crate::instructions::commit_draw::reveal_committed_randomness;
use crate::state::{DrawKind, DrawResult, HolderRegistry, Lottery, RewardBook};
use crate::utils::{seed_interval, OutcomeTier};

/// Accounts shared by the scheduled, lightning and forced draw cranks.
#[derive(Accounts)]
pub struct RunDraw<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        seeds = [SEED_HOLDER_REGISTRY],
        bump = holder_registry.bump
    )]
    pub holder_registry: Account<'info, HolderRegistry>,

    #[account(
        mut,
        seeds = [SEED_REWARD_BOOK],
        bump = reward_book.bump
    )]
    pub reward_book: Account<'info, RewardBook>,

    /// Randomness account from Switchboard, committed beforehand.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Scheduled slot draw. Fires on a fixed period and re-arms itself on every
/// tick; a tick that cannot evaluate is a skip, never an error, so the crank
/// bot keeps a clean transaction history.
pub fn process_run_scheduled_draw(ctx: Context<RunDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }
    require!(lottery.is_running, ErrorCode::LotteryNotRunning);
    require!(now >= lottery.next_scheduled_draw_ts, ErrorCode::CrankTooEarly);

    lottery.next_scheduled_draw_ts = now + SCHEDULED_DRAW_INTERVAL;

    let seed =
        reveal_committed_randomness(lottery, &ctx.accounts.randomness_account_data, &clock)?;
    let result = lottery.execute_draw(
        &ctx.accounts.holder_registry,
        &mut ctx.accounts.reward_book,
        DrawKind::Scheduled,
        &seed,
        now,
    )?;
    let pool_display = lottery.displayed_pool(&ctx.accounts.reward_book);
    emit_draw_result(
        DrawKind::Scheduled,
        &result,
        lottery.weather.multiplier_bps,
        pool_display,
        now,
    );
    Ok(())
}

/// Lightning strike. Independent of the scheduled draw, re-armed with a
/// fresh randomized delay on every tick.
pub fn process_run_lightning_draw(ctx: Context<RunDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }
    require!(lottery.is_running, ErrorCode::LotteryNotRunning);
    require!(now >= lottery.next_lightning_draw_ts, ErrorCode::CrankTooEarly);

    let seed =
        reveal_committed_randomness(lottery, &ctx.accounts.randomness_account_data, &clock)?;
    lottery.next_lightning_draw_ts =
        now + seed_interval(&seed, 16, LIGHTNING_DELAY_MIN, LIGHTNING_DELAY_MAX);

    let result = lottery.execute_draw(
        &ctx.accounts.holder_registry,
        &mut ctx.accounts.reward_book,
        DrawKind::Lightning,
        &seed,
        now,
    )?;
    let pool_display = lottery.displayed_pool(&ctx.accounts.reward_book);
    emit_draw_result(
        DrawKind::Lightning,
        &result,
        lottery.weather.multiplier_bps,
        pool_display,
        now,
    );
    Ok(())
}

/// Operator-forced draw: bypasses the timer, never the funding or round-gate
/// preconditions. The regular schedule is left untouched.
pub fn process_force_draw(ctx: Context<RunDraw>, kind: DrawKind) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }
    require!(lottery.is_running, ErrorCode::LotteryNotRunning);

    let seed =
        reveal_committed_randomness(lottery, &ctx.accounts.randomness_account_data, &clock)?;
    let result = lottery.execute_draw(
        &ctx.accounts.holder_registry,
        &mut ctx.accounts.reward_book,
        kind,
        &seed,
        now,
    )?;
    let pool_display = lottery.displayed_pool(&ctx.accounts.reward_book);
    emit_draw_result(
        kind,
        &result,
        lottery.weather.multiplier_bps,
        pool_display,
        now,
    );
    Ok(())
}

fn emit_draw_result(
    kind: DrawKind,
    result: &DrawResult,
    weather_bps: u64,
    pool_display: u64,
    now: i64,
) {
    match result {
        DrawResult::Skipped(reason) => {
            msg!("Draw skipped: {:?}", reason);
            emit!(DrawSkipped {
                ts: now,
                kind,
                reason: *reason,
            });
        }
        DrawResult::NoWin { symbols } => {
            emit!(DrawSettled {
                ts: now,
                kind,
                symbols: *symbols,
                tier: symbols.map(|_| OutcomeTier::NoWin),
                winner: None,
                reward_id: None,
                prize_lamports: 0,
                weather_multiplier_bps: weather_bps,
                pool_display_lamports: pool_display,
            });
        }
        DrawResult::Win {
            reward_id,
            winner,
            prize_lamports,
            tier,
            symbols,
        } => {
            msg!("Winner {} takes {} lamports", winner, prize_lamports);
            emit!(DrawSettled {
                ts: now,
                kind,
                symbols: *symbols,
                tier: *tier,
                winner: Some(*winner),
                reward_id: Some(*reward_id),
                prize_lamports: *prize_lamports,
                weather_multiplier_bps: weather_bps,
                pool_display_lamports: pool_display,
            });
        }
    }
}
