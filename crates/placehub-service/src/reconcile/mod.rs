//! Remote mutation followed by mandatory re-derivation of local state.

pub mod client;
pub mod outcome;
pub mod state;

pub use client::ReconciliationClient;
pub use outcome::{MoveReport, UpdateFailure, UpdateOutcome};
pub use state::{TreeSnapshot, TreeState};
