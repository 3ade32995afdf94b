use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{FeeClaimRecorded, PoolReset};
use crate::state::Lottery;

/// Accounts for the fee-claim crank reporting what the external claim pulled.
#[derive(Accounts)]
pub struct RecordFees<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// The external claim succeeded: this absolute amount is now backing the next
/// draw, and the batch is marked fresh.
pub fn process_record_fee_claim(ctx: Context<RecordFees>, amount_lamports: u64) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    lottery.record_claim(amount_lamports);
    msg!("Fee claim recorded: {} lamports", amount_lamports);
    emit!(FeeClaimRecorded {
        ts: clock.unix_timestamp,
        amount_lamports,
    });
    Ok(())
}

/// The fee cycle found nothing claimable. The pool is zeroed rather than
/// carried over: a balance that was not reconfirmed this cycle must never
/// fund a draw.
pub fn process_reset_unfunded_pool(ctx: Context<RecordFees>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    lottery.reset_if_unfunded();
    emit!(PoolReset {
        ts: clock.unix_timestamp,
    });
    Ok(())
}
