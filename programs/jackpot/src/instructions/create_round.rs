use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, DISCRIMINATOR_SIZE, ROUND_SEED};
use crate::error::JackpotError;
use crate::events::RoundCreated;
use crate::state::{Config, GameRound};

/// Accounts required to open a new round.
///
/// The round PDA is derived from the index alone, so clients and the program
/// agree on its address without any lookup.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct CreateRound<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ JackpotError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    /// Loaded even when it already exists so a repeat shows up as
    /// `RoundAlreadyExists` rather than an allocation failure.
    #[account(
        init_if_needed,
        payer = admin,
        space = DISCRIMINATOR_SIZE + GameRound::INIT_SPACE,
        seeds = [ROUND_SEED, &index.to_le_bytes()],
        bump
    )]
    pub round_acc: Box<Account<'info, GameRound>>,

    pub system_program: Program<'info, System>,
}

/// Opens round `index` for `config.round_duration` seconds.
///
/// # Arguments
/// * `ctx` - Context containing CreateRound accounts
/// * `index` - Must equal the config's round counter
pub fn process_create_round(ctx: Context<CreateRound>, index: u64) -> Result<()> {
    let clock = Clock::get()?;
    let config = &mut ctx.accounts.config;
    let round = &mut ctx.accounts.round_acc;

    config.start_round(round, index, clock.unix_timestamp, ctx.bumps.round_acc)?;

    msg!("Round {} open until {}", index, round.ends_at);

    emit!(RoundCreated {
        index,
        started_at: round.started_at,
        ends_at: round.ends_at,
    });

    Ok(())
}
