use anchor_lang::prelude::*;
use instructions::*;
use state::{DrawKind, HolderBalance};

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod tests;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod creator_fee_lottery {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn start_lottery(ctx: Context<UpdateLottery>) -> Result<()> {
        process_start_lottery(ctx)
    }

    pub fn stop_lottery(ctx: Context<UpdateLottery>) -> Result<()> {
        process_stop_lottery(ctx)
    }

    pub fn sync_holders(
        ctx: Context<SyncHolders>,
        page: Vec<HolderBalance>,
        first_page: bool,
        last_page: bool,
    ) -> Result<()> {
        process_sync_holders(ctx, page, first_page, last_page)
    }

    pub fn record_fee_claim(ctx: Context<RecordFees>, amount_lamports: u64) -> Result<()> {
        process_record_fee_claim(ctx, amount_lamports)
    }

    pub fn reset_unfunded_pool(ctx: Context<RecordFees>) -> Result<()> {
        process_reset_unfunded_pool(ctx)
    }

    pub fn commit_draw_randomness(ctx: Context<CommitDrawRandomness>) -> Result<()> {
        process_commit_draw_randomness(ctx)
    }

    pub fn run_scheduled_draw(ctx: Context<RunDraw>) -> Result<()> {
        process_run_scheduled_draw(ctx)
    }

    pub fn run_lightning_draw(ctx: Context<RunDraw>) -> Result<()> {
        process_run_lightning_draw(ctx)
    }

    pub fn force_draw(ctx: Context<RunDraw>, kind: DrawKind) -> Result<()> {
        process_force_draw(ctx, kind)
    }

    pub fn tick_weather(ctx: Context<TickWeather>) -> Result<()> {
        process_tick_weather(ctx)
    }

    pub fn confirm_reward(
        ctx: Context<SettleReward>,
        reward_id: u64,
        tx_ref: [u8; 64],
    ) -> Result<()> {
        process_confirm_reward(ctx, reward_id, tx_ref)
    }

    pub fn fail_reward(ctx: Context<SettleReward>, reward_id: u64) -> Result<()> {
        process_fail_reward(ctx, reward_id)
    }

    pub fn retry_reward(ctx: Context<SettleReward>, reward_id: u64) -> Result<()> {
        process_retry_reward(ctx, reward_id)
    }
}
