use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, DISCRIMINATOR_SIZE, VAULT_SEED};
use crate::error::JackpotError;
use crate::events::{ConfigInitialized, ConfigUpdated};
use crate::state::{Config, Vault};

/// Accounts required to initialize the jackpot configuration.
/// Creates the singleton `Config` and the custody `Vault` exactly once.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Becomes the admin and pays for both accounts.
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    /// Program-owned account holding every deposited lamport.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_SIZE + Vault::INIT_SPACE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to change configuration parameters.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ JackpotError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

/// Initializes the configuration with the signer as admin.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeConfig accounts
/// * `team_wallet` - Destination of swept fees
/// * `platform_fee_bps` - Fee in basis points, at most 10_000
/// * `round_duration` - Lifetime of each round in seconds
/// * `min_deposit_amount` - Smallest accepted deposit in lamports
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    team_wallet: Pubkey,
    platform_fee_bps: u16,
    round_duration: i64,
    min_deposit_amount: u64,
) -> Result<()> {
    Config::validate_fee_bps(platform_fee_bps)?;
    Config::validate_round_duration(round_duration)?;

    let admin = ctx.accounts.admin.key();

    let config = &mut ctx.accounts.config;
    config.admin = admin;
    config.team_wallet = team_wallet;
    config.platform_fee_bps = platform_fee_bps;
    config.round_duration = round_duration;
    config.round_counter = 0;
    config.min_deposit_amount = min_deposit_amount;
    config.bump = ctx.bumps.config;

    let vault = &mut ctx.accounts.vault;
    vault.escrowed = 0;
    vault.fee_residue = 0;
    vault.total_paid_out = 0;
    vault.total_fees_swept = 0;
    vault.bump = ctx.bumps.vault;

    msg!("Config initialized, admin: {}", admin);

    emit!(ConfigInitialized {
        admin,
        team_wallet,
        platform_fee_bps,
        round_duration,
        min_deposit_amount,
    });

    Ok(())
}

/// Replaces each parameter given as `Some`. The round duration applies to
/// rounds created afterwards, the fee to rewards claimed afterwards.
pub fn process_update_config(
    ctx: Context<UpdateConfig>,
    new_team_wallet: Option<Pubkey>,
    new_platform_fee_bps: Option<u16>,
    new_round_duration: Option<i64>,
    new_min_deposit_amount: Option<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(team_wallet) = new_team_wallet {
        config.team_wallet = team_wallet;
    }

    if let Some(fee_bps) = new_platform_fee_bps {
        Config::validate_fee_bps(fee_bps)?;
        config.platform_fee_bps = fee_bps;
    }

    if let Some(duration) = new_round_duration {
        Config::validate_round_duration(duration)?;
        config.round_duration = duration;
    }

    if let Some(min_deposit) = new_min_deposit_amount {
        config.min_deposit_amount = min_deposit;
    }

    emit!(ConfigUpdated {
        team_wallet: new_team_wallet,
        platform_fee_bps: new_platform_fee_bps,
        round_duration: new_round_duration,
        min_deposit_amount: new_min_deposit_amount,
    });

    msg!("Config updated");

    Ok(())
}
