pub mod math;
pub mod random;
pub mod transfer;

pub use math::*;
pub use random::*;
pub use transfer::*;
