pub mod admin;
pub mod claim_reward;
pub mod commit_randomness;
pub mod create_round;
pub mod join_round;
pub mod select_winner;
pub mod transfer_fees;

pub use admin::*;
pub use claim_reward::*;
pub use commit_randomness::*;
pub use create_round::*;
pub use join_round::*;
pub use select_winner::*;
pub use transfer_fees::*;
