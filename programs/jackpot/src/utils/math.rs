use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::JackpotError;

/// A settled pot split between the platform and the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u64,
    pub reward: u64,
}

/// Formula: fee = floor(total * fee_bps / 10_000), reward = total - fee.
///
/// The product is taken in u128 so no pot a u64 can hold loses precision
/// before the division.
pub fn split_fee(total: u64, fee_bps: u16) -> Result<FeeSplit> {
    require!(
        u64::from(fee_bps) <= BPS_DENOMINATOR,
        JackpotError::InvalidFeeBps
    );

    let fee = u128::from(total)
        .checked_mul(u128::from(fee_bps))
        .ok_or(JackpotError::ArithmeticOverflow)?
        .checked_div(u128::from(BPS_DENOMINATOR))
        .ok_or(JackpotError::ArithmeticOverflow)?;
    let fee = u64::try_from(fee).map_err(|_| JackpotError::ArithmeticOverflow)?;

    let reward = total
        .checked_sub(fee)
        .ok_or(JackpotError::ArithmeticOverflow)?;

    Ok(FeeSplit { fee, reward })
}
