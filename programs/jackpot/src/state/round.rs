use anchor_lang::prelude::*;

use crate::constants::{MAX_DEPOSITS, REVEAL_DELAY_SLOTS, SLOT_HASHES_WINDOW};
use crate::error::JackpotError;
use crate::utils::math::{split_fee, FeeSplit};
use crate::utils::random::{draw_for_round, find_reveal_hash};

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct Deposit {
    pub user: Pubkey,
    pub amount: u64,
}

/// Outcome of a draw. Stored as one value so the winner fields are either
/// all present or all absent.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Winner {
    pub user: Pubkey,
    /// Position of the winning entry in `deposits`.
    pub index: u32,
    /// Amount of the winning entry, cached at selection time.
    pub deposit_amount: u64,
    /// Raw draw in `[0, total_amount)`, kept for audit.
    pub rand: u64,
}

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub enum RoundStatus {
    #[default]
    Open,
    /// Expired with no deposits; terminal.
    CompletedNoWinner,
    /// Winner recorded, reward not yet paid.
    Completed,
    /// Reward paid; terminal.
    Claimed,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct GameRound {
    pub index: u64,

    /// Sum of all deposits. Reset to zero once the reward is claimed.
    pub total_amount: u64,

    /// Entries in arrival order.
    #[max_len(MAX_DEPOSITS)]
    pub deposits: Vec<Deposit>,

    pub started_at: i64,
    pub ends_at: i64,

    pub winner: Option<Winner>,
    pub status: RoundStatus,

    /// Slot whose hash seeds the draw, set by `commit_randomness`.
    pub reveal_slot: Option<u64>,

    /// Number of commitments made for this round. Anything above one means
    /// an earlier commitment went stale without being drawn.
    pub commit_count: u32,

    /// Platform fee retained in the vault when the reward was claimed.
    pub fee_amount: u64,
    pub fees_swept: bool,

    pub bump: u8,
}

/// Amounts released by a successful claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub total: u64,
    pub fee: u64,
    pub reward: u64,
}

/// How `settle_draw` completed a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    NoWinner,
    Winner(Winner),
}

impl GameRound {
    pub fn is_initialized(&self) -> bool {
        self.ends_at > self.started_at
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.ends_at
    }

    pub fn is_completed(&self) -> bool {
        self.status != RoundStatus::Open
    }

    pub fn open(&mut self, index: u64, now: i64, duration: i64, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), JackpotError::RoundAlreadyExists);
        require!(duration > 0, JackpotError::InvalidRoundDuration);

        self.index = index;
        self.total_amount = 0;
        self.deposits = Vec::new();
        self.started_at = now;
        self.ends_at = now
            .checked_add(duration)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        self.winner = None;
        self.status = RoundStatus::Open;
        self.reveal_slot = None;
        self.commit_count = 0;
        self.fee_amount = 0;
        self.fees_swept = false;
        self.bump = bump;
        Ok(())
    }

    pub fn add_deposit(
        &mut self,
        user: Pubkey,
        amount: u64,
        now: i64,
        min_deposit_amount: u64,
    ) -> Result<()> {
        require!(
            !self.is_expired(now) && !self.is_completed(),
            JackpotError::RoundClosed
        );
        require!(
            amount > 0 && amount >= min_deposit_amount,
            JackpotError::DepositTooSmall
        );
        require!(self.deposits.len() < MAX_DEPOSITS, JackpotError::RoundFull);

        self.total_amount = self
            .total_amount
            .checked_add(amount)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        self.deposits.push(Deposit { user, amount });
        Ok(())
    }

    /// Sum of all deposit entries, or `None` if it does not fit a u64.
    pub fn deposits_total(&self) -> Option<u64> {
        self.deposits
            .iter()
            .try_fold(0u64, |acc, d| acc.checked_add(d.amount))
    }

    fn ensure_drawable(&self, now: i64) -> Result<()> {
        require!(self.is_expired(now), JackpotError::RoundNotExpired);
        require!(!self.is_completed(), JackpotError::AlreadyCompleted);
        require!(!self.deposits.is_empty(), JackpotError::NoDeposits);
        Ok(())
    }

    /// Commits to the hash of a future slot. A pending commitment can only be
    /// replaced once its slot hash has left the sysvar window.
    pub fn commit_randomness(&mut self, now: i64, slot: u64) -> Result<u64> {
        self.ensure_drawable(now)?;
        if let Some(pending) = self.reveal_slot {
            require!(
                is_stale(pending, slot),
                JackpotError::RandomnessAlreadyCommitted
            );
        }

        let reveal_slot = slot
            .checked_add(REVEAL_DELAY_SLOTS)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        self.commit_count = self
            .commit_count
            .checked_add(1)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        self.reveal_slot = Some(reveal_slot);
        Ok(reveal_slot)
    }

    /// Returns the committed slot once its hash can be read at `slot`.
    pub fn revealable_slot(&self, now: i64, slot: u64) -> Result<u64> {
        self.ensure_drawable(now)?;
        let reveal_slot = self
            .reveal_slot
            .ok_or(JackpotError::RandomnessNotCommitted)?;
        require!(slot > reveal_slot, JackpotError::RandomnessNotResolved);
        require!(!is_stale(reveal_slot, slot), JackpotError::RandomnessExpired);
        Ok(reveal_slot)
    }

    /// Terminal transition for a round that expired without deposits.
    pub fn close_without_winner(&mut self, now: i64) -> Result<()> {
        require!(self.is_expired(now), JackpotError::RoundNotExpired);
        require!(!self.is_completed(), JackpotError::AlreadyCompleted);
        require!(self.deposits.is_empty(), JackpotError::InvalidDraw);

        self.status = RoundStatus::CompletedNoWinner;
        Ok(())
    }

    /// Index of the first deposit whose running sum strictly exceeds `draw`.
    ///
    /// Every deposit owns the half-open interval `[prefix, prefix + amount)`,
    /// so a draw in `[0, total_amount)` lands in exactly one of them.
    pub fn find_winner(&self, draw: u64) -> Option<usize> {
        let mut cumulative: u64 = 0;
        for (index, deposit) in self.deposits.iter().enumerate() {
            cumulative = cumulative.checked_add(deposit.amount)?;
            if draw < cumulative {
                return Some(index);
            }
        }
        None
    }

    pub fn select_winner(&mut self, now: i64, rand: u64) -> Result<Winner> {
        self.ensure_drawable(now)?;
        require!(rand < self.total_amount, JackpotError::InvalidDraw);

        let index = self.find_winner(rand).ok_or(JackpotError::InvalidDraw)?;
        let deposit = self.deposits[index];
        let winner = Winner {
            user: deposit.user,
            index: u32::try_from(index).map_err(|_| JackpotError::ArithmeticOverflow)?,
            deposit_amount: deposit.amount,
            rand,
        };

        self.winner = Some(winner);
        self.status = RoundStatus::Completed;
        Ok(winner)
    }

    /// Completes an expired round from raw `SlotHashes` data: closes it when
    /// nobody deposited, otherwise draws from the committed slot.
    pub fn settle_draw(&mut self, now: i64, slot: u64, slot_hashes: &[u8]) -> Result<DrawOutcome> {
        if self.deposits.is_empty() {
            self.close_without_winner(now)?;
            return Ok(DrawOutcome::NoWinner);
        }

        let reveal_slot = self.revealable_slot(now, slot)?;
        let slot_hash =
            find_reveal_hash(slot_hashes, reveal_slot).ok_or(JackpotError::RandomnessExpired)?;
        let rand = draw_for_round(&slot_hash, self, reveal_slot)?;
        self.select_winner(now, rand).map(DrawOutcome::Winner)
    }

    /// Settles the pot for `destination`, which must be the recorded winner.
    /// `total_amount` is zeroed as the claimed marker; deposits stay for audit.
    pub fn claim(&mut self, destination: &Pubkey, fee_bps: u16) -> Result<Payout> {
        match self.status {
            RoundStatus::Open => return err!(JackpotError::NotCompleted),
            RoundStatus::CompletedNoWinner => return err!(JackpotError::NoDeposits),
            RoundStatus::Claimed => return err!(JackpotError::AlreadyClaimed),
            RoundStatus::Completed => {}
        }
        require!(self.total_amount > 0, JackpotError::AlreadyClaimed);

        let winner = self.winner.ok_or(JackpotError::NotCompleted)?;
        require_keys_eq!(*destination, winner.user, JackpotError::WinnerMismatch);

        let total = self.total_amount;
        let FeeSplit { fee, reward } = split_fee(total, fee_bps)?;

        self.total_amount = 0;
        self.fee_amount = fee;
        self.status = RoundStatus::Claimed;

        Ok(Payout {
            winner: winner.user,
            total,
            fee,
            reward,
        })
    }

    /// Marks this round's fee as swept and returns it.
    pub fn take_fees(&mut self) -> Result<u64> {
        require!(
            self.status == RoundStatus::Claimed,
            JackpotError::RewardNotClaimed
        );
        require!(!self.fees_swept, JackpotError::FeesAlreadySwept);

        self.fees_swept = true;
        Ok(self.fee_amount)
    }
}

fn is_stale(reveal_slot: u64, slot: u64) -> bool {
    slot.saturating_sub(reveal_slot) >= SLOT_HASHES_WINDOW
}

/// Loads the round stored at a PDA, reporting a missing account as
/// `RoundNotFound` instead of a generic deserialization failure.
pub fn load_round(info: &AccountInfo) -> Result<GameRound> {
    require!(
        info.owner == &crate::ID && !info.data_is_empty(),
        JackpotError::RoundNotFound
    );
    let mut data: &[u8] = &info.try_borrow_data()?;
    let round = GameRound::try_deserialize(&mut data)?;
    require!(round.is_initialized(), JackpotError::RoundNotFound);
    Ok(round)
}

/// Writes `round` back into the account it was loaded from.
pub fn store_round(info: &AccountInfo, round: &GameRound) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    round.try_serialize(&mut writer)
}
