use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::JackpotError;
use crate::state::GameRound;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Config {
    /// Authority allowed to create rounds, select winners, pay out and sweep fees.
    pub admin: Pubkey,

    /// Destination of swept platform fees.
    pub team_wallet: Pubkey,

    /// Platform fee in basis points (10_000 = 100%).
    pub platform_fee_bps: u16,

    /// Lifetime of a new round, in seconds.
    pub round_duration: i64,

    /// Index the next created round must use.
    pub round_counter: u64,

    /// Smallest accepted deposit, in lamports.
    pub min_deposit_amount: u64,

    pub bump: u8,
}

impl Config {
    pub fn validate_fee_bps(platform_fee_bps: u16) -> Result<()> {
        require!(
            u64::from(platform_fee_bps) <= BPS_DENOMINATOR,
            JackpotError::InvalidFeeBps
        );
        Ok(())
    }

    pub fn validate_round_duration(round_duration: i64) -> Result<()> {
        require!(round_duration > 0, JackpotError::InvalidRoundDuration);
        Ok(())
    }

    /// Claims `index` as the next round. Rounds are numbered strictly
    /// sequentially starting from zero.
    pub fn allocate_round(&mut self, index: u64) -> Result<()> {
        require!(index == self.round_counter, JackpotError::InvalidRoundIndex);
        self.round_counter = self
            .round_counter
            .checked_add(1)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Opens `round` as round `index` for `round_duration` seconds.
    pub fn start_round(
        &mut self,
        round: &mut GameRound,
        index: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!round.is_initialized(), JackpotError::RoundAlreadyExists);
        self.allocate_round(index)?;
        round.open(index, now, self.round_duration, bump)
    }
}
