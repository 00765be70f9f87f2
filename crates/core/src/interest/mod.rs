//! Interest models - pure compounding and amortization formulas.

mod formulas;

pub use formulas::{emi, fd_future_value, rd_future_value, sip_future_value, total_loan_interest};
