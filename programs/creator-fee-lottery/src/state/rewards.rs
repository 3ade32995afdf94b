use anchor_lang::prelude::*;

use crate::constants::MAX_REWARDS;
use crate::error::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Scheduled,
    Lightning,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardStatus {
    Pending,
    Confirmed,
    Failed,
}

/// A promised payout, tracked from the moment a draw selects a winner until
/// the external transfer is confirmed. Entries are never deleted, only
/// evicted from the audit ring once Confirmed.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug)]
pub struct PendingReward {
    pub id: u64,
    pub winner: Pubkey,
    pub amount: u64,
    pub kind: DrawKind,
    pub created_at: i64,
    pub status: RewardStatus,
    /// Signature of the external payout transaction, set on confirm.
    pub tx_ref: Option<[u8; 64]>,
}

/// Audit ring of rewards plus the round-gate derived from it.
#[account]
#[derive(InitSpace)]
pub struct RewardBook {
    pub bump: u8,
    pub next_id: u64,
    #[max_len(MAX_REWARDS)]
    pub rewards: Vec<PendingReward>,
}

impl RewardBook {
    /// The round-gate: a new draw round may start only when no reward is
    /// Pending or Failed. An unpaid winner blocks everything.
    pub fn can_start_new_round(&self) -> bool {
        self.rewards
            .iter()
            .all(|r| r.status == RewardStatus::Confirmed)
    }

    /// Sum of amounts still owed to winners.
    pub fn outstanding_lamports(&self) -> u64 {
        self.rewards
            .iter()
            .filter(|r| r.status != RewardStatus::Confirmed)
            .fold(0u64, |acc, r| acc.saturating_add(r.amount))
    }

    pub fn get(&self, id: u64) -> Option<&PendingReward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    /// Opens a Pending reward, closing the round-gate. When the ring is full
    /// the oldest Confirmed entry is evicted; unresolved entries are never
    /// dropped.
    pub fn open(&mut self, winner: Pubkey, amount: u64, kind: DrawKind, now: i64) -> Result<u64> {
        if self.rewards.len() >= MAX_REWARDS {
            let evict = self
                .rewards
                .iter()
                .position(|r| r.status == RewardStatus::Confirmed)
                .ok_or(ErrorCode::RewardBookFull)?;
            self.rewards.remove(evict);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.rewards.push(PendingReward {
            id,
            winner,
            amount,
            kind,
            created_at: now,
            status: RewardStatus::Pending,
            tx_ref: None,
        });
        Ok(id)
    }

    /// Pending -> Confirmed with the external transaction signature.
    /// Unknown id or any other source status is a no-op returning false.
    pub fn confirm(&mut self, id: u64, tx_ref: [u8; 64]) -> bool {
        match self.rewards.iter_mut().find(|r| r.id == id) {
            Some(r) if r.status == RewardStatus::Pending => {
                r.status = RewardStatus::Confirmed;
                r.tx_ref = Some(tx_ref);
                true
            }
            _ => false,
        }
    }

    /// Pending -> Failed. The obligation stays on the book and keeps the
    /// round-gate closed until retried and confirmed.
    pub fn fail(&mut self, id: u64) -> bool {
        match self.rewards.iter_mut().find(|r| r.id == id) {
            Some(r) if r.status == RewardStatus::Pending => {
                r.status = RewardStatus::Failed;
                true
            }
            _ => false,
        }
    }

    /// Failed -> Pending so the payout can be submitted again.
    pub fn retry(&mut self, id: u64) -> bool {
        match self.rewards.iter_mut().find(|r| r.id == id) {
            Some(r) if r.status == RewardStatus::Failed => {
                r.status = RewardStatus::Pending;
                true
            }
            _ => false,
        }
    }
}
