//! FinPal Core - financial-modeling and gamification domain logic.
//!
//! This crate contains the calculation-and-state core of the FinPal
//! personal-finance learning app: compounding/amortization formulas, the
//! decision impact analyzer, the goal tracker, and the points/achievements
//! ledger. It performs no I/O and is consumed in-process by a presentation
//! layer.

pub mod app_state;
pub mod constants;
pub mod decisions;
pub mod errors;
pub mod goals;
pub mod interest;
pub mod profile;
pub mod rewards;

pub use app_state::AppState;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
