//! Computer-versus-computer matches between tabula strategies.

pub mod command;
pub mod error;
pub mod runner;

pub use command::{GameSpec, MatchParams, parse_args};
pub use error::MatchError;
pub use runner::{MatchLimits, MatchRecord, play, run};
