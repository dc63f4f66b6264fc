use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::SLOT_HASHES_WINDOW;
use crate::error::JackpotError;
use crate::state::GameRound;

const SLOT_HASH_ENTRY_LEN: usize = 8 + 32;

/// Returns the hash of the first slot at or after `reveal_slot` in raw
/// `SlotHashes` sysvar data.
///
/// A skipped slot has no entry, so the next produced slot stands in for it.
/// The sysvar is too large to deserialize on-chain, so the entries
/// (`u64` count, then `(slot, hash)` pairs, newest first) are scanned in place.
pub fn find_reveal_hash(data: &[u8], reveal_slot: u64) -> Option<[u8; 32]> {
    let count = u64::from_le_bytes(data.get(..8)?.try_into().ok()?);
    let count = count.min(SLOT_HASHES_WINDOW) as usize;

    data.get(8..)?
        .chunks_exact(SLOT_HASH_ENTRY_LEN)
        .take(count)
        .filter_map(|entry| {
            let slot = u64::from_le_bytes(entry[..8].try_into().ok()?);
            (slot >= reveal_slot).then_some((slot, entry))
        })
        .min_by_key(|(slot, _)| *slot)
        .and_then(|(_, entry)| entry[8..].try_into().ok())
}

/// Mixes the revealed slot hash with the round's final state.
///
/// Neither the admin nor the depositors know the slot hash when deposits
/// close or when the commitment is made.
pub fn draw_seed(slot_hash: &[u8; 32], round: &GameRound, reveal_slot: u64) -> [u8; 32] {
    let deposit_count = round.deposits.len() as u64;
    hashv(&[
        slot_hash.as_ref(),
        &round.index.to_le_bytes(),
        &round.total_amount.to_le_bytes(),
        &deposit_count.to_le_bytes(),
        &round.ends_at.to_le_bytes(),
        &reveal_slot.to_le_bytes(),
    ])
    .to_bytes()
}

/// Reduces a seed to `[0, total)`.
///
/// 128 bits of seed against a u64 modulus keep the modulo bias under 2^-64.
pub fn reduce_draw(seed: &[u8; 32], total: u64) -> Result<u64> {
    require!(total > 0, JackpotError::NoDeposits);
    let mut wide = [0u8; 16];
    wide.copy_from_slice(&seed[..16]);
    let draw = u128::from_le_bytes(wide) % u128::from(total);
    u64::try_from(draw).map_err(|_| JackpotError::ArithmeticOverflow.into())
}

pub fn draw_for_round(slot_hash: &[u8; 32], round: &GameRound, reveal_slot: u64) -> Result<u64> {
    reduce_draw(&draw_seed(slot_hash, round, reveal_slot), round.total_amount)
}
