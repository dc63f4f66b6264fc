use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::JackpotError;
use crate::events::RandomnessCommitted;
use crate::state::{load_round, store_round, Config};

/// Accounts required to commit the randomness of an expired round.
///
/// Ensures:
/// 1. Only the admin can commit.
/// 2. Deposits are final (the round has expired) before the slot is chosen.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct CommitRandomness<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ JackpotError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: address is pinned by the seeds; contents are validated by `load_round`.
    #[account(
        mut,
        seeds = [ROUND_SEED, &index.to_le_bytes()],
        bump,
    )]
    pub round_acc: UncheckedAccount<'info>,
}

pub fn process_commit_randomness(ctx: Context<CommitRandomness>, index: u64) -> Result<()> {
    let clock = Clock::get()?;
    let round_info = ctx.accounts.round_acc.to_account_info();

    let (reveal_slot, commit_count) =
        apply_commit(&round_info, clock.unix_timestamp, clock.slot)?;

    msg!("Current slot: {}", clock.slot);
    msg!(
        "Round {} draws from slot {} (commitment #{})",
        index,
        reveal_slot,
        commit_count
    );

    emit!(RandomnessCommitted {
        index,
        reveal_slot,
        commit_count,
    });

    Ok(())
}

/// Commits the stored round to a future slot. Returns that slot and how many
/// commitments the round has seen.
pub fn apply_commit(round_info: &AccountInfo, now: i64, slot: u64) -> Result<(u64, u32)> {
    let mut round = load_round(round_info)?;
    let reveal_slot = round.commit_randomness(now, slot)?;
    store_round(round_info, &round)?;
    Ok((reveal_slot, round.commit_count))
}
