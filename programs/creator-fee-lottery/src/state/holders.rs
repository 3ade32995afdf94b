use anchor_lang::prelude::*;

use crate::constants::{BPS_ONE, MAX_HOLDERS, TICKET_UNIT};
use crate::error::ErrorCode;

/// One entry of the holder snapshot as pushed by the off-chain indexer crank.
/// Balances are whole tokens.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct HolderBalance {
    pub wallet: Pubkey,
    pub token_balance: u64,
}

/// A holder with its derived ticket weight.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketedHolder {
    pub wallet: Pubkey,
    pub token_balance: u64,
    pub tickets: u64,
}

/// Linear ticket policy: one ticket per TICKET_UNIT whole tokens, floored at
/// one so any positive balance keeps a nonzero win probability.
pub fn allocate_tickets(token_balance: u64) -> u64 {
    (token_balance / TICKET_UNIT).max(1)
}

/// The current eligible-holder set. Replaced wholesale on every snapshot
/// cycle, pushed in pages because a full list does not fit one transaction.
/// Draws treat an in-flight snapshot as no eligible holders.
#[account]
#[derive(InitSpace)]
pub struct HolderRegistry {
    pub bump: u8,
    pub updated_at: i64,
    pub total_tickets: u64,
    /// True between the first and last page of a snapshot push.
    pub sync_in_progress: bool,
    #[max_len(MAX_HOLDERS)]
    pub holders: Vec<TicketedHolder>,
}

impl HolderRegistry {
    /// Starts a fresh snapshot cycle, discarding the previous set.
    pub fn begin_snapshot(&mut self) {
        self.holders.clear();
        self.total_tickets = 0;
        self.sync_in_progress = true;
    }

    /// Appends one page of the snapshot and recomputes its ticket weights.
    /// Zero-balance entries are dropped at this boundary.
    pub fn extend(&mut self, page: Vec<HolderBalance>) -> Result<()> {
        for entry in page {
            if entry.token_balance == 0 {
                continue;
            }
            let tickets = allocate_tickets(entry.token_balance);
            self.total_tickets = self
                .total_tickets
                .checked_add(tickets)
                .ok_or(ErrorCode::MathOverflow)?;
            self.holders.push(TicketedHolder {
                wallet: entry.wallet,
                token_balance: entry.token_balance,
                tickets,
            });
        }
        require!(self.holders.len() <= MAX_HOLDERS, ErrorCode::HolderListTooLarge);
        Ok(())
    }

    /// Seals the snapshot; the set becomes eligible for draws again.
    pub fn commit_snapshot(&mut self, now: i64) {
        self.sync_in_progress = false;
        self.updated_at = now;
    }

    /// Single-page snapshot swap: begin, extend and commit in one call.
    pub fn replace(&mut self, snapshot: Vec<HolderBalance>, now: i64) -> Result<()> {
        self.begin_snapshot();
        self.extend(snapshot)?;
        self.commit_snapshot(now);
        Ok(())
    }

    /// Win probability of a wallet in basis points, for the read surface.
    pub fn win_probability_bps(&self, wallet: &Pubkey) -> Option<u64> {
        if self.total_tickets == 0 {
            return None;
        }
        self.holders
            .iter()
            .find(|h| h.wallet == *wallet)
            .map(|h| h.tickets.saturating_mul(BPS_ONE) / self.total_tickets)
    }
}
