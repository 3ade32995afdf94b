use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::state::Lottery;

/// Accounts to commit a Switchboard randomness account ahead of a draw or
/// weather crank.
#[derive(Accounts)]
pub struct CommitDrawRandomness<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Stores the randomness account for the next reveal. The commit must be for
/// the immediately preceding slot or the value could already be known.
pub fn process_commit_draw_randomness(ctx: Context<CommitDrawRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;

    if ctx.accounts.payer.key() != lottery.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| ErrorCode::InvalidRandomnessData)?;
    if randomness_data.seed_slot != clock.slot - 1 {
        return Err(ErrorCode::RandomnessAlreadyRevealed.into());
    }

    lottery.randomness_account = ctx.accounts.randomness_account_data.key();
    Ok(())
}

/// Reveals the committed randomness and clears the commitment so one seed can
/// never feed two cranks.
pub fn reveal_committed_randomness(
    lottery: &mut Lottery,
    randomness_account_data: &UncheckedAccount,
    clock: &Clock,
) -> Result<[u8; 32]> {
    if lottery.randomness_account == Pubkey::default() {
        return Err(ErrorCode::RandomnessNotCommitted.into());
    }
    if randomness_account_data.key() != lottery.randomness_account {
        return Err(ErrorCode::IncorrectRandomnessAccount.into());
    }

    let randomness_data = RandomnessAccountData::parse(randomness_account_data.data.borrow())
        .map_err(|_| ErrorCode::InvalidRandomnessData)?;
    let value = randomness_data
        .get_value(clock)
        .map_err(|_| ErrorCode::RandomnessNotResolved)?;

    lottery.randomness_account = Pubkey::default();
    Ok(value)
}
