//! Pure, side-effect-free financial formulas.
//!
//! All functions take an annual rate expressed as a percentage (12 means
//! 12%) and a duration in months, and return an amount in the same unit as
//! the input amount. Invalid arguments are rejected up front so no formula
//! can silently produce NaN or infinity.

use crate::errors::{Error, Result};

fn validate_amount(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_input(format!(
            "{name} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(())
}

fn validate_rate(annual_rate_pct: f64) -> Result<()> {
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(Error::invalid_input(format!(
            "annual rate must be a non-negative finite percentage, got {annual_rate_pct}"
        )));
    }
    Ok(())
}

fn validate_months(months: f64) -> Result<()> {
    if !months.is_finite() || months <= 0.0 {
        return Err(Error::invalid_input(format!(
            "months must be positive, got {months}"
        )));
    }
    Ok(())
}

fn validate_whole_months(months: u32) -> Result<()> {
    if months == 0 {
        return Err(Error::invalid_input("months must be positive, got 0"));
    }
    Ok(())
}

/// Future value of a fixed monthly SIP contribution, compounded monthly.
///
/// Uses the annuity-due convention: each contribution earns one extra
/// period of interest. A zero rate degenerates to the plain sum of
/// contributions.
pub fn sip_future_value(monthly: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    validate_amount("monthly contribution", monthly)?;
    validate_rate(annual_rate_pct)?;
    validate_whole_months(months)?;

    let r = annual_rate_pct / 100.0 / 12.0;
    let n = months as f64;
    if r == 0.0 {
        return Ok(monthly * n);
    }
    Ok(monthly * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r))
}

/// Future value of a recurring deposit, approximated with quarterly
/// compounding over `months / 3` (possibly fractional) quarters.
pub fn rd_future_value(monthly: f64, annual_rate_pct: f64, months: f64) -> Result<f64> {
    validate_amount("monthly deposit", monthly)?;
    validate_rate(annual_rate_pct)?;
    validate_months(months)?;

    let r = annual_rate_pct / 100.0 / 4.0;
    if r == 0.0 {
        return Ok(monthly * months);
    }
    let quarters = months / 3.0;
    Ok(monthly * 3.0 * (((1.0 + r).powf(quarters) - 1.0) / r) * (1.0 + r))
}

/// Future value of a quarterly-compounded lump-sum fixed deposit.
pub fn fd_future_value(principal: f64, annual_rate_pct: f64, months: f64) -> Result<f64> {
    validate_amount("principal", principal)?;
    validate_rate(annual_rate_pct)?;
    validate_months(months)?;

    let years = months / 12.0;
    Ok(principal * (1.0 + annual_rate_pct / 100.0 / 4.0).powf(4.0 * years))
}

/// Standard reducing-balance equated monthly installment.
///
/// A zero rate degenerates to straight-line principal repayment.
pub fn emi(principal: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    validate_amount("principal", principal)?;
    validate_rate(annual_rate_pct)?;
    validate_whole_months(months)?;

    let r = annual_rate_pct / 100.0 / 12.0;
    let n = months as f64;
    if r == 0.0 {
        return Ok(principal / n);
    }
    let growth = (1.0 + r).powf(n);
    Ok(principal * r * growth / (growth - 1.0))
}

/// Total interest paid over the life of a loan: EMI times tenure, less the
/// principal.
pub fn total_loan_interest(principal: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    Ok(emi(principal, annual_rate_pct, months)? * months as f64 - principal)
}
