use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED, VAULT_SEED};
use crate::error::JackpotError;
use crate::events::FeesTransferred;
use crate::state::{load_round, store_round, Config, Vault};
use crate::utils::withdraw_from_vault;

/// Accounts required to sweep the fee of a claimed round to the team wallet.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct TransferFees<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ JackpotError::Unauthorized,
        has_one = team_wallet @ JackpotError::InvalidTeamWallet,
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

    /// CHECK: must equal `config.team_wallet`.
    #[account(mut)]
    pub team_wallet: UncheckedAccount<'info>,
}

/// Transfers exactly the fee retained when round `index` was claimed.
/// Escrow of rounds that are still pending is never touched.
pub fn process_transfer_fees(ctx: Context<TransferFees>, index: u64) -> Result<()> {
    let round_info = ctx.accounts.round_acc.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    let team_wallet_info = ctx.accounts.team_wallet.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(vault_info.data_len());

    let fee = apply_fee_sweep(
        &round_info,
        &mut ctx.accounts.vault,
        &vault_info,
        &team_wallet_info,
        rent_reserve,
    )?;

    msg!("Round {}: swept {} in fees", index, fee);

    emit!(FeesTransferred {
        index,
        team_wallet: team_wallet_info.key(),
        amount: fee,
    });

    Ok(())
}

/// Marks the stored round's fee as swept and pays it to `team_wallet_info`.
pub fn apply_fee_sweep(
    round_info: &AccountInfo,
    vault: &mut Vault,
    vault_info: &AccountInfo,
    team_wallet_info: &AccountInfo,
    rent_reserve: u64,
) -> Result<u64> {
    let mut round = load_round(round_info)?;
    let fee = vault.settle_fees(&mut round, vault_info.lamports(), rent_reserve)?;
    if fee > 0 {
        withdraw_from_vault(vault_info, team_wallet_info, fee)?;
    }
    store_round(round_info, &round)?;
    Ok(fee)
}
