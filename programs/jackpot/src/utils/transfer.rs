use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::JackpotError;

/// Moves lamports from a signer into the vault through the system program.
pub fn deposit_to_vault<'info>(
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    system_program_info: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program_info,
            system_program::Transfer { from, to: vault },
        ),
        amount,
    )
}

/// Debits the program-owned vault directly and credits `to`.
pub fn withdraw_from_vault(vault: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let vault_balance = vault
        .lamports()
        .checked_sub(amount)
        .ok_or(JackpotError::InsufficientFunds)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(JackpotError::ArithmeticOverflow)?;

    **vault.try_borrow_mut_lamports()? = vault_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}
