use anchor_lang::prelude::*;
use instructions::*;

/// Program-wide constants: PDA seeds, round bounds and randomness timing.
pub mod constants;

/// Custom error codes returned by every instruction.
pub mod error;

/// Events emitted on each state transition.
pub mod events;

/// Instruction handlers: configuration, round lifecycle, draw and settlement.
pub mod instructions;

/// On-chain accounts: `Config`, `GameRound` and the custody `Vault`.
pub mod state;

/// Fee arithmetic, draw derivation and vault lamport movement.
pub mod utils;

declare_id!("DN7Xb9DqgyZtYXAZEtvpMbEMZQk5D7QWpKakEHW5jqe5");

#[program]
pub mod jackpot {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        team_wallet: Pubkey,
        platform_fee_bps: u16,
        round_duration: i64,
        min_deposit_amount: u64,
    ) -> Result<()> {
        process_initialize_config(
            ctx,
            team_wallet,
            platform_fee_bps,
            round_duration,
            min_deposit_amount,
        )
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_team_wallet: Option<Pubkey>,
        new_platform_fee_bps: Option<u16>,
        new_round_duration: Option<i64>,
        new_min_deposit_amount: Option<u64>,
    ) -> Result<()> {
        process_update_config(
            ctx,
            new_team_wallet,
            new_platform_fee_bps,
            new_round_duration,
            new_min_deposit_amount,
        )
    }

    pub fn create_round(ctx: Context<CreateRound>, index: u64) -> Result<()> {
        process_create_round(ctx, index)
    }

    pub fn join_round(ctx: Context<JoinRound>, index: u64, amount: u64) -> Result<()> {
        process_join_round(ctx, index, amount)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>, index: u64) -> Result<()> {
        process_commit_randomness(ctx, index)
    }

    pub fn select_winner(ctx: Context<SelectWinner>, index: u64) -> Result<()> {
        process_select_winner(ctx, index)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>, index: u64) -> Result<()> {
        process_claim_reward(ctx, index)
    }

    pub fn transfer_fees(ctx: Context<TransferFees>, index: u64) -> Result<()> {
        process_transfer_fees(ctx, index)
    }
}
