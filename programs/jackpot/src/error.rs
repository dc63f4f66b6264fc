use anchor_lang::prelude::*;

#[error_code]
pub enum JackpotError {
    #[msg("Signer is not the configured admin")]
    Unauthorized,
    #[msg("No round exists at this index")]
    RoundNotFound,
    #[msg("A round already exists at this index")]
    RoundAlreadyExists,
    #[msg("Round index does not match the next round counter")]
    InvalidRoundIndex,
    #[msg("Round is closed for deposits")]
    RoundClosed,
    #[msg("Round has not expired yet")]
    RoundNotExpired,
    #[msg("Round is already completed")]
    AlreadyCompleted,
    #[msg("Round is not completed")]
    NotCompleted,
    #[msg("Reward has already been claimed")]
    AlreadyClaimed,
    #[msg("Round has no deposits")]
    NoDeposits,
    #[msg("Deposit is below the minimum amount")]
    DepositTooSmall,
    #[msg("Round has reached the maximum number of deposits")]
    RoundFull,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Winner account does not match the recorded winner")]
    WinnerMismatch,
    #[msg("Platform fee must be at most 10000 basis points")]
    InvalidFeeBps,
    #[msg("Round duration must be positive")]
    InvalidRoundDuration,
    #[msg("Team wallet does not match the configured team wallet")]
    InvalidTeamWallet,
    #[msg("Randomness is already committed for this round")]
    RandomnessAlreadyCommitted,
    #[msg("Randomness has not been committed for this round")]
    RandomnessNotCommitted,
    #[msg("Committed randomness is not revealed yet")]
    RandomnessNotResolved,
    #[msg("Committed slot hash is no longer available, commit again")]
    RandomnessExpired,
    #[msg("Draw is outside the round's total amount")]
    InvalidDraw,
    #[msg("Reward has not been claimed yet")]
    RewardNotClaimed,
    #[msg("Fees of this round were already transferred")]
    FeesAlreadySwept,
}
