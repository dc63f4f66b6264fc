use anchor_lang::prelude::*;

use crate::error::JackpotError;
use crate::state::{GameRound, Payout};

/// Custody account for every lamport deposited into the game.
///
/// The lamports live on this program-owned account; the fields below only
/// track who those lamports are owed to. Debits must leave
/// `lamports >= rent minimum + escrowed + fee_residue`.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Vault {
    /// Deposits of rounds whose reward has not been claimed yet.
    pub escrowed: u64,

    /// Fees collected at claim time and not yet swept to the team wallet.
    pub fee_residue: u64,

    /// Lifetime rewards paid to winners.
    pub total_paid_out: u64,

    /// Lifetime fees swept to the team wallet.
    pub total_fees_swept: u64,

    pub bump: u8,
}

impl Vault {
    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.escrowed = self
            .escrowed
            .checked_add(amount)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Moves a settled round out of escrow: `reward` leaves the vault, `fee`
    /// stays behind as residue awaiting a sweep.
    pub fn release_reward(&mut self, total: u64, fee: u64, reward: u64) -> Result<()> {
        self.escrowed = self
            .escrowed
            .checked_sub(total)
            .ok_or(JackpotError::InsufficientFunds)?;
        self.fee_residue = self
            .fee_residue
            .checked_add(fee)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(reward)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release_fees(&mut self, fee: u64) -> Result<()> {
        self.fee_residue = self
            .fee_residue
            .checked_sub(fee)
            .ok_or(JackpotError::InsufficientFunds)?;
        self.total_fees_swept = self
            .total_fees_swept
            .checked_add(fee)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Lamports the vault still owes to pending winners and the team wallet.
    pub fn owed(&self) -> Result<u64> {
        self.escrowed
            .checked_add(self.fee_residue)
            .ok_or_else(|| JackpotError::ArithmeticOverflow.into())
    }

    /// Checks that debiting `amount` from a balance of `lamports` keeps the
    /// rent reserve and everything still owed. Call after the bookkeeping for
    /// the debit has been applied.
    pub fn ensure_can_debit(&self, lamports: u64, rent_reserve: u64, amount: u64) -> Result<()> {
        let remaining = lamports
            .checked_sub(amount)
            .ok_or(JackpotError::InsufficientFunds)?;
        let floor = rent_reserve
            .checked_add(self.owed()?)
            .ok_or(JackpotError::ArithmeticOverflow)?;
        require!(remaining >= floor, JackpotError::InsufficientFunds);
        Ok(())
    }

    /// Records a deposit on `round` and in escrow once the depositor is
    /// known to cover it. The lamports themselves are moved by the caller.
    pub fn accept_deposit(
        &mut self,
        round: &mut GameRound,
        user: Pubkey,
        amount: u64,
        user_lamports: u64,
        now: i64,
        min_deposit_amount: u64,
    ) -> Result<()> {
        round.add_deposit(user, amount, now, min_deposit_amount)?;
        require!(user_lamports >= amount, JackpotError::InsufficientFunds);
        self.record_deposit(amount)
    }

    /// Claims `round` for `destination` and releases its pot from escrow.
    /// The returned reward is safe to debit from a vault holding `lamports`.
    pub fn settle_claim(
        &mut self,
        round: &mut GameRound,
        destination: &Pubkey,
        fee_bps: u16,
        lamports: u64,
        rent_reserve: u64,
    ) -> Result<Payout> {
        let payout = round.claim(destination, fee_bps)?;
        self.release_reward(payout.total, payout.fee, payout.reward)?;
        self.ensure_can_debit(lamports, rent_reserve, payout.reward)?;
        Ok(payout)
    }

    /// Releases the fee retained by a claimed `round` for sweeping.
    pub fn settle_fees(
        &mut self,
        round: &mut GameRound,
        lamports: u64,
        rent_reserve: u64,
    ) -> Result<u64> {
        let fee = round.take_fees()?;
        self.release_fees(fee)?;
        self.ensure_can_debit(lamports, rent_reserve, fee)?;
        Ok(fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENT: u64 = 1_000;

    #[test]
    fn claim_moves_escrow_into_fee_residue() {
        let mut vault = Vault::default();
        vault.record_deposit(100).unwrap();
        vault.record_deposit(200).unwrap();

        vault.release_reward(300, 24, 276).unwrap();
        assert_eq!(vault.escrowed, 0);
        assert_eq!(vault.fee_residue, 24);
        assert_eq!(vault.total_paid_out, 276);

        // 300 deposited on top of the rent reserve, 276 leaves.
        assert!(vault.ensure_can_debit(RENT + 300, RENT, 276).is_ok());
    }

    #[test]
    fn sweep_cannot_touch_pending_escrow() {
        let mut vault = Vault::default();
        // Round A settled with a 24 lamport fee, round B still holds 500.
        vault.record_deposit(300).unwrap();
        vault.release_reward(300, 24, 276).unwrap();
        vault.record_deposit(500).unwrap();
        let lamports = RENT + 24 + 500;

        vault.release_fees(24).unwrap();
        assert!(vault.ensure_can_debit(lamports, RENT, 24).is_ok());

        // Draining the whole balance would eat into round B's escrow.
        let err: Error = JackpotError::InsufficientFunds.into();
        assert_eq!(
            vault.ensure_can_debit(lamports, RENT, 24 + 500).unwrap_err(),
            err
        );
    }

    #[test]
    fn fee_residue_cannot_go_negative() {
        let mut vault = Vault::default();
        assert!(vault.release_fees(1).is_err());
    }

    fn completed_round(winner: Pubkey, amount: u64) -> GameRound {
        let mut round = GameRound::default();
        round.open(0, 0, 60, 255).unwrap();
        round.add_deposit(winner, amount, 1, 1).unwrap();
        round.select_winner(60, 0).unwrap();
        round
    }

    #[test]
    fn deposit_needs_funds_and_an_open_round() {
        let mut vault = Vault::default();
        let mut round = GameRound::default();
        round.open(0, 0, 60, 255).unwrap();
        let user = Pubkey::new_unique();

        let err: Error = JackpotError::InsufficientFunds.into();
        assert_eq!(
            vault.accept_deposit(&mut round, user, 50, 49, 1, 1).unwrap_err(),
            err
        );
        assert_eq!(vault.escrowed, 0);

        vault.accept_deposit(&mut round, user, 50, 50, 1, 1).unwrap();
        assert_eq!(vault.escrowed, 50);
        assert_eq!(round.total_amount, 50);

        let err: Error = JackpotError::RoundClosed.into();
        assert_eq!(
            vault.accept_deposit(&mut round, user, 50, 50, 60, 1).unwrap_err(),
            err
        );
    }

    #[test]
    fn claim_settles_against_vault_balance() {
        let winner = Pubkey::new_unique();
        let mut round = completed_round(winner, 300);
        let mut vault = Vault::default();
        vault.record_deposit(300).unwrap();

        // The vault is short of the escrow it tracks.
        let mut short = vault.clone();
        let mut draft = round.clone();
        let err: Error = JackpotError::InsufficientFunds.into();
        assert_eq!(
            short
                .settle_claim(&mut draft, &winner, 800, RENT + 200, RENT)
                .unwrap_err(),
            err
        );

        let payout = vault
            .settle_claim(&mut round, &winner, 800, RENT + 300, RENT)
            .unwrap();
        assert_eq!(payout.reward, 276);
        assert_eq!(vault.fee_residue, 24);

        let fee = vault.settle_fees(&mut round, RENT + 24, RENT).unwrap();
        assert_eq!(fee, 24);
        assert_eq!(vault.fee_residue, 0);
        assert_eq!(vault.total_fees_swept, 24);
    }
}
