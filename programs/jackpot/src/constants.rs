/// PDA seed of the singleton `Config` account.
pub const CONFIG_SEED: &[u8] = b"globalconfig";

/// PDA seed prefix of a `GameRound`; the round index (little endian) follows.
pub const ROUND_SEED: &[u8] = b"gameround";

/// PDA seed of the singleton custody `Vault`.
pub const VAULT_SEED: &[u8] = b"globalvault";

/// Anchor account discriminator length.
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Upper bound on deposits per round; sizes the round account.
pub const MAX_DEPOSITS: usize = 100;

/// Fees are expressed in basis points of this denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Slots between a randomness commitment and the slot whose hash is revealed.
pub const REVEAL_DELAY_SLOTS: u64 = 4;

/// Number of recent slots kept by the `SlotHashes` sysvar.
pub const SLOT_HASHES_WINDOW: u64 = 512;
