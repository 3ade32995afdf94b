use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not the lottery authority.")]
    NotAuthorized,
    #[msg("Lottery is not running.")]
    LotteryNotRunning,
    #[msg("Crank fired before its scheduled time.")]
    CrankTooEarly,
    #[msg("Randomness account does not match the committed account.")]
    IncorrectRandomnessAccount,
    #[msg("Randomness account data could not be parsed.")]
    InvalidRandomnessData,
    #[msg("Randomness was committed for a past slot and is already revealed.")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been resolved yet.")]
    RandomnessNotResolved,
    #[msg("No randomness has been committed for this crank.")]
    RandomnessNotCommitted,
    #[msg("Math operation overflow.")]
    MathOverflow,
    #[msg("Holder snapshot exceeds the registry capacity.")]
    HolderListTooLarge,
    #[msg("Reward book is full of unresolved rewards.")]
    RewardBookFull,
}
