pub mod config;
pub mod round;
pub mod vault;

pub use config::*;
pub use round::*;
pub use vault::*;
