use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{RewardConfirmed, RewardFailed, RewardRetried};
use crate::state::{Lottery, RewardBook};

/// Accounts for reporting the result of an external payout submission.
#[derive(Accounts)]
pub struct SettleReward<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [SEED_REWARD_BOOK],
        bump = reward_book.bump
    )]
    pub reward_book: Account<'info, RewardBook>,
}

/// The external transfer landed: moves the reward to Confirmed, deducts the
/// pool and may reopen the round-gate. A reward that is not Pending is left
/// untouched; the crank sees success either way.
pub fn process_confirm_reward(
    ctx: Context<SettleReward>,
    reward_id: u64,
    tx_ref: [u8; 64],
) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;
    let book = &mut ctx.accounts.reward_book;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    if !book.confirm(reward_id, tx_ref) {
        msg!("Reward {} is not pending; confirm ignored", reward_id);
        return Ok(());
    }
    if let Some(reward) = book.get(reward_id) {
        let (winner, amount) = (reward.winner, reward.amount);
        lottery.settle_confirmed(amount);
        emit!(RewardConfirmed {
            ts: clock.unix_timestamp,
            reward_id,
            winner,
            amount_lamports: amount,
            round_gate_open: book.can_start_new_round(),
            pool_display_lamports: lottery.displayed_pool(book),
        });
    }
    Ok(())
}

/// The external transfer failed. The reward moves to Failed and stays on the
/// book: the obligation to the winner is never dropped, and all future draws
/// stay blocked until an operator retries or confirms it.
pub fn process_fail_reward(ctx: Context<SettleReward>, reward_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let book = &mut ctx.accounts.reward_book;

    if ctx.accounts.payer.key() != ctx.accounts.lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    if !book.fail(reward_id) {
        msg!("Reward {} is not pending; fail ignored", reward_id);
        return Ok(());
    }
    if let Some(reward) = book.get(reward_id) {
        msg!(
            "Reward {} failed; {} lamports still owed to {}",
            reward_id,
            reward.amount,
            reward.winner
        );
        emit!(RewardFailed {
            ts: clock.unix_timestamp,
            reward_id,
            winner: reward.winner,
            amount_lamports: reward.amount,
        });
    }
    Ok(())
}

/// Puts a Failed reward back to Pending so the payout can be submitted again.
pub fn process_retry_reward(ctx: Context<SettleReward>, reward_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let book = &mut ctx.accounts.reward_book;

    if ctx.accounts.payer.key() != ctx.accounts.lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    if !book.retry(reward_id) {
        msg!("Reward {} is not failed; retry ignored", reward_id);
        return Ok(());
    }
    emit!(RewardRetried {
        ts: clock.unix_timestamp,
        reward_id,
    });
    Ok(())
}
