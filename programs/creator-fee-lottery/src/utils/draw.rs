use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::state::{DrawKind, TicketedHolder};

/// Reel symbols for scheduled draws, grouped into three rarity tiers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    // Common
    Cherry,
    Apple,
    Orange,
    Grape,
    // Rare
    Fire,
    Lightning,
    Diamond,
    // Legendary
    Crown,
}

impl Default for Symbol {
    // Borsh needs Default to decode fixed arrays of symbols in events.
    fn default() -> Self {
        Symbol::Cherry
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolTier {
    Common,
    Rare,
    Legendary,
}

const COMMON_SYMBOLS: [Symbol; 4] = [Symbol::Cherry, Symbol::Apple, Symbol::Orange, Symbol::Grape];
const RARE_SYMBOLS: [Symbol; 3] = [Symbol::Fire, Symbol::Lightning, Symbol::Diamond];
const LEGENDARY_SYMBOLS: [Symbol; 1] = [Symbol::Crown];

impl Symbol {
    pub fn tier(&self) -> SymbolTier {
        match self {
            Symbol::Cherry | Symbol::Apple | Symbol::Orange | Symbol::Grape => SymbolTier::Common,
            Symbol::Fire | Symbol::Lightning | Symbol::Diamond => SymbolTier::Rare,
            Symbol::Crown => SymbolTier::Legendary,
        }
    }
}

/// Outcome tier of a scheduled draw, ordered by specificity of the matching
/// rule that produced it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeTier {
    NoWin,
    Small,
    Medium,
    Bonus,
    Large,
    Jackpot,
}

impl OutcomeTier {
    pub fn multiplier(&self) -> u64 {
        match self {
            OutcomeTier::NoWin => 0,
            OutcomeTier::Small => 2,
            OutcomeTier::Medium => 5,
            OutcomeTier::Bonus => 8,
            OutcomeTier::Large => 10,
            OutcomeTier::Jackpot => 50,
        }
    }
}

/// Reads eight little-endian bytes of the revealed seed starting at `offset`.
pub fn seed_u64(seed: &[u8; 32], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&seed[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Reads four little-endian bytes of the revealed seed starting at `offset`.
pub fn seed_u32(seed: &[u8; 32], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&seed[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

/// Weight-table roll in `[0, 100)` from four seed bytes. The 32-bit source
/// keeps the modulo residues uniform; a single byte would skew residues
/// below 56 by a factor of 3/2.
pub fn seed_percent(seed: &[u8; 32], offset: usize) -> u64 {
    (seed_u32(seed, offset) % 100) as u64
}

/// Uniform value in `[min, max]` derived from the seed at `offset`.
pub fn seed_interval(seed: &[u8; 32], offset: usize, min: i64, max: i64) -> i64 {
    let span = (max - min + 1) as u64;
    min + (seed_u64(seed, offset) % span) as i64
}

/// Rolls three independent symbols: a four-byte roll picks the tier by
/// weight (common 70, rare 25, legendary 5 out of 100), one more byte picks
/// uniformly inside the tier.
///
/// Seed layout for a draw: bytes 8..16 hold the winner roll, 16..28 the
/// three tier rolls, 28..31 the in-tier picks. Lightning draws read none of
/// the reel bytes.
pub fn roll_symbols(seed: &[u8; 32]) -> [Symbol; 3] {
    let mut symbols = [Symbol::Cherry; 3];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        let tier_roll = seed_percent(seed, 16 + i * 4);
        let pick = seed[28 + i] as usize;
        *symbol = if tier_roll < TIER_WEIGHT_COMMON {
            COMMON_SYMBOLS[pick % COMMON_SYMBOLS.len()]
        } else if tier_roll < TIER_WEIGHT_COMMON + TIER_WEIGHT_RARE {
            RARE_SYMBOLS[pick % RARE_SYMBOLS.len()]
        } else {
            LEGENDARY_SYMBOLS[pick % LEGENDARY_SYMBOLS.len()]
        };
    }
    symbols
}

/// Classifies a symbol roll, highest specificity first: triple legendary,
/// triple rare, triple common, then the Fire+Lightning bonus pair, then any
/// two-of-three match, then nothing.
pub fn evaluate_symbols(symbols: &[Symbol; 3]) -> OutcomeTier {
    if symbols[0] == symbols[1] && symbols[1] == symbols[2] {
        return match symbols[0].tier() {
            SymbolTier::Legendary => OutcomeTier::Jackpot,
            SymbolTier::Rare => OutcomeTier::Large,
            SymbolTier::Common => OutcomeTier::Medium,
        };
    }
    let has_fire = symbols.contains(&Symbol::Fire);
    let has_lightning = symbols.contains(&Symbol::Lightning);
    if has_fire && has_lightning {
        return OutcomeTier::Bonus;
    }
    if symbols[0] == symbols[1] || symbols[1] == symbols[2] || symbols[0] == symbols[2] {
        return OutcomeTier::Small;
    }
    OutcomeTier::NoWin
}

/// Ticket-weighted winner pick: each holder owns a contiguous range sized by
/// its ticket count; the roll lands in exactly one range.
pub fn pick_winner(holders: &[TicketedHolder], total_tickets: u64, roll: u64) -> Option<usize> {
    if total_tickets == 0 {
        return None;
    }
    let point = roll % total_tickets;
    let mut cursor = 0u64;
    for (index, holder) in holders.iter().enumerate() {
        cursor = cursor.saturating_add(holder.tickets);
        if point < cursor {
            return Some(index);
        }
    }
    None
}

/// Prize sizing: base is a fixed fraction of the pool with a hard cap, then
/// scaled by the outcome multiplier and the weather multiplier (bps). The
/// result never exceeds the pool itself.
pub fn prize_amount(
    pool_lamports: u64,
    kind: DrawKind,
    tier_multiplier: u64,
    weather_bps: u64,
) -> Result<u64> {
    let (divisor, cap) = match kind {
        DrawKind::Scheduled => (SCHEDULED_POOL_DIVISOR, SCHEDULED_BASE_CAP),
        DrawKind::Lightning => (LIGHTNING_POOL_DIVISOR, LIGHTNING_BASE_CAP),
    };
    let base = (pool_lamports / divisor).min(cap);
    let scaled = (base as u128)
        .checked_mul(tier_multiplier as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(weather_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_ONE as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let prize = u64::try_from(scaled).map_err(|_| ErrorCode::MathOverflow)?;
    Ok(prize.min(pool_lamports))
}
