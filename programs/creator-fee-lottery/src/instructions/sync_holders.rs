use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::HoldersSynced;
use crate::state::{HolderBalance, HolderRegistry, Lottery};

/// Accounts for the indexer crank pushing a fresh holder snapshot.
#[derive(Accounts)]
pub struct SyncHolders<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [SEED_HOLDER_REGISTRY],
        bump = holder_registry.bump
    )]
    pub holder_registry: Account<'info, HolderRegistry>,
}

/// Pushes one page of a fresh holder snapshot. A full list exceeds the
/// transaction size limit, so the indexer sends it in pages: the first page
/// discards the old set, the last seals the new one. Draws skip while the
/// push is in flight, so no draw ever evaluates a half-updated list.
pub fn process_sync_holders(
    ctx: Context<SyncHolders>,
    page: Vec<HolderBalance>,
    first_page: bool,
    last_page: bool,
) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    if ctx.accounts.payer.key() != ctx.accounts.lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    let registry = &mut ctx.accounts.holder_registry;
    if first_page {
        registry.begin_snapshot();
    }
    registry.extend(page)?;
    if last_page {
        registry.commit_snapshot(now);
        msg!(
            "Holder snapshot: {} holders, {} tickets",
            registry.holders.len(),
            registry.total_tickets
        );
        emit!(HoldersSynced {
            ts: now,
            holder_count: registry.holders.len() as u64,
            total_tickets: registry.total_tickets,
        });
    }
    Ok(())
}
