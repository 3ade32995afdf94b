use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::WeatherChanged;
use crate::instructions::commit_draw::reveal_committed_randomness;
use crate::state::Lottery;

/// Accounts for the weather transition crank.
#[derive(Accounts)]
pub struct TickWeather<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard, committed beforehand.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Rolls the next weather and re-arms the transition timer. Weather only
/// moves while the lottery is running.
pub fn process_tick_weather(ctx: Context<TickWeather>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }
    require!(lottery.is_running, ErrorCode::LotteryNotRunning);
    require!(now >= lottery.next_weather_ts, ErrorCode::CrankTooEarly);

    let seed =
        reveal_committed_randomness(lottery, &ctx.accounts.randomness_account_data, &clock)?;
    let weather = lottery.transition_weather(&seed, now);

    msg!(
        "Weather is now {:?} at {} bps for {}s",
        weather.kind,
        weather.multiplier_bps,
        weather.duration_secs
    );
    emit!(WeatherChanged {
        ts: now,
        kind: weather.kind,
        multiplier_bps: weather.multiplier_bps,
        duration_secs: weather.duration_secs,
    });
    Ok(())
}
