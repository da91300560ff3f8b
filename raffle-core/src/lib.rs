//! Raffle - console registration with a bounded window and a random draw
//!
//! This library holds everything except the console itself: persisted state
//! (registrant log and timer file), name validation, the registration
//! session, and the winner draw once the window closes.

pub mod config;
pub mod draw;
pub mod error;
pub mod name;
pub mod session;
pub mod storage;

pub use config::RaffleConfig;
pub use error::{RaffleError, Result};
pub use session::{DrawOutcome, RaffleSession, SessionStatus};
pub use storage::Storage;
