use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED, VAULT_SEED};
use crate::error::JackpotError;
use crate::events::RewardClaimed;
use crate::state::{load_round, store_round, Config, Payout, Vault};
use crate::utils::withdraw_from_vault;

/// Accounts required to pay out a completed round.
///
/// Ensures:
/// 1. Only the admin can trigger the payout.
/// 2. The destination is the winner recorded by `select_winner`.
/// 3. The vault keeps everything owed to other rounds and unswept fees.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct ClaimReward<'info> {
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

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: compared against the recorded winner before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Processes the reward claim for round `index`.
///
/// Steps:
/// 1. Verify the round is completed, unclaimed and `winner` matches.
/// 2. Split the pot into platform fee and reward.
/// 3. Move the pot out of escrow, leaving the fee as residue.
/// 4. Transfer the reward from the vault to the winner.
pub fn process_claim_reward(ctx: Context<ClaimReward>, index: u64) -> Result<()> {
    let round_info = ctx.accounts.round_acc.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(vault_info.data_len());

    let payout = apply_claim(
        &round_info,
        &ctx.accounts.config,
        &mut ctx.accounts.vault,
        &vault_info,
        &winner_info,
        rent_reserve,
    )?;

    msg!(
        "Round {}: paid {} to {}, fee {}",
        index,
        payout.reward,
        payout.winner,
        payout.fee
    );

    emit!(RewardClaimed {
        index,
        winner: payout.winner,
        reward: payout.reward,
        fee: payout.fee,
    });

    Ok(())
}

/// Claims the stored round for `winner_info` and pays the reward out of the
/// vault, keeping `rent_reserve` and everything still owed.
pub fn apply_claim(
    round_info: &AccountInfo,
    config: &Config,
    vault: &mut Vault,
    vault_info: &AccountInfo,
    winner_info: &AccountInfo,
    rent_reserve: u64,
) -> Result<Payout> {
    let mut round = load_round(round_info)?;
    let payout = vault.settle_claim(
        &mut round,
        winner_info.key,
        config.platform_fee_bps,
        vault_info.lamports(),
        rent_reserve,
    )?;
    withdraw_from_vault(vault_info, winner_info, payout.reward)?;
    store_round(round_info, &round)?;
    Ok(payout)
}
