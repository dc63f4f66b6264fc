use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub team_wallet: Pubkey,
    pub platform_fee_bps: u16,
    pub round_duration: i64,
    pub min_deposit_amount: u64,
}

#[event]
pub struct ConfigUpdated {
    pub team_wallet: Option<Pubkey>,
    pub platform_fee_bps: Option<u16>,
    pub round_duration: Option<i64>,
    pub min_deposit_amount: Option<u64>,
}

#[event]
pub struct RoundCreated {
    pub index: u64,
    pub started_at: i64,
    pub ends_at: i64,
}

#[event]
pub struct Deposited {
    pub index: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub total_amount: u64,
    pub deposit_count: u32,
}

#[event]
pub struct RandomnessCommitted {
    pub index: u64,
    pub reveal_slot: u64,
    /// Counts this commitment; anything above one is a re-roll after a
    /// stale commitment.
    pub commit_count: u32,
}

#[event]
pub struct WinnerSelected {
    pub index: u64,
    pub winner: Pubkey,
    pub winner_index: u32,
    pub winner_deposit_amount: u64,
    pub rand: u64,
    pub total_amount: u64,
    pub commit_count: u32,
}

#[event]
pub struct RoundClosedWithoutWinner {
    pub index: u64,
    pub closed_at: i64,
}

#[event]
pub struct RewardClaimed {
    pub index: u64,
    pub winner: Pubkey,
    pub reward: u64,
    pub fee: u64,
}

#[event]
pub struct FeesTransferred {
    pub index: u64,
    pub team_wallet: Pubkey,
    pub amount: u64,
}
