use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::JackpotError;
use crate::events::{RoundClosedWithoutWinner, WinnerSelected};
use crate::state::{load_round, store_round, Config, DrawOutcome, GameRound};

/// Accounts required to settle the draw of an expired round.
///
/// This ensures that:
/// 1. Only the admin can select a winner.
/// 2. The round has expired and has not been completed.
/// 3. The draw uses the slot hash committed in `commit_randomness`.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct SelectWinner<'info> {
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

    /// CHECK: the SlotHashes sysvar, read raw by `find_reveal_hash`.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Completes round `index`. A round without deposits closes with no winner;
/// otherwise the committed slot hash is mixed with the round state into a
/// draw in `[0, total_amount)` and mapped onto the deposits.
pub fn process_select_winner(ctx: Context<SelectWinner>, index: u64) -> Result<()> {
    let clock = Clock::get()?;
    let round_info = ctx.accounts.round_acc.to_account_info();

    let (round, outcome) = {
        let slot_hashes = ctx.accounts.slot_hashes.try_borrow_data()?;
        apply_draw(&round_info, clock.unix_timestamp, clock.slot, &slot_hashes)?
    };

    match outcome {
        DrawOutcome::NoWinner => {
            msg!("Round {} closed without deposits", index);
            emit!(RoundClosedWithoutWinner {
                index,
                closed_at: clock.unix_timestamp,
            });
        }
        DrawOutcome::Winner(winner) => {
            msg!("Draw: {} of {}", winner.rand, round.total_amount);
            msg!("Winner: {} (deposit #{})", winner.user, winner.index);
            emit!(WinnerSelected {
                index,
                winner: winner.user,
                winner_index: winner.index,
                winner_deposit_amount: winner.deposit_amount,
                rand: winner.rand,
                total_amount: round.total_amount,
                commit_count: round.commit_count,
            });
        }
    }

    Ok(())
}

/// Settles the draw of the stored round from raw `SlotHashes` data.
pub fn apply_draw(
    round_info: &AccountInfo,
    now: i64,
    slot: u64,
    slot_hashes: &[u8],
) -> Result<(GameRound, DrawOutcome)> {
    let mut round = load_round(round_info)?;
    let outcome = round.settle_draw(now, slot, slot_hashes)?;
    store_round(round_info, &round)?;
    Ok((round, outcome))
}
