//! User profile module - onboarding data captured once and read everywhere.

mod profile_model;

pub use profile_model::{IncomeRange, UserProfile};
