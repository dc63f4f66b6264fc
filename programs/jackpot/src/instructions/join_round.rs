use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED, VAULT_SEED};
use crate::events::Deposited;
use crate::state::{load_round, store_round, Config, GameRound, Vault};
use crate::utils::deposit_to_vault;

/// Accounts required to deposit into an open round.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct JoinRound<'info> {
    /// Depositor; any identity may join.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
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

    pub system_program: Program<'info, System>,
}

/// Deposits `amount` lamports into round `index`.
///
/// Steps performed:
/// 1. Check the round is open and the amount acceptable.
/// 2. Check the depositor can cover the amount.
/// 3. Record the deposit on the round and in the vault's escrow.
/// 4. Transfer the lamports into the vault.
pub fn process_join_round(ctx: Context<JoinRound>, index: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let user_lamports = ctx.accounts.user.lamports();
    let round_info = ctx.accounts.round_acc.to_account_info();

    let round = apply_join(
        &round_info,
        &ctx.accounts.config,
        &mut ctx.accounts.vault,
        user,
        user_lamports,
        amount,
        clock.unix_timestamp,
    )?;

    deposit_to_vault(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    msg!(
        "Round {}: {} deposited {}, pot {}",
        index,
        user,
        amount,
        round.total_amount
    );

    emit!(Deposited {
        index,
        user,
        amount,
        total_amount: round.total_amount,
        deposit_count: round.deposits.len() as u32,
    });

    Ok(())
}

/// Records a deposit of `amount` on the round stored in `round_info` and in
/// the vault's escrow. The lamports themselves are moved by the caller.
pub fn apply_join(
    round_info: &AccountInfo,
    config: &Config,
    vault: &mut Vault,
    user: Pubkey,
    user_lamports: u64,
    amount: u64,
    now: i64,
) -> Result<GameRound> {
    let mut round = load_round(round_info)?;
    vault.accept_deposit(
        &mut round,
        user,
        amount,
        user_lamports,
        now,
        config.min_deposit_amount,
    )?;
    store_round(round_info, &round)?;
    Ok(round)
}
