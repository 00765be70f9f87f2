//! User profile domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Bucketed monthly income range captured during onboarding.
///
/// Each bucket maps to a single representative monthly income used by the
/// decision analyzer. The mapping is a deliberate coarse approximation, not
/// a real income figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeRange {
    Below25k,
    From25kTo50k,
    From50kTo100k,
    Above100k,
}

impl IncomeRange {
    /// Representative monthly income for this bucket, in rupees.
    pub fn representative_monthly_income(&self) -> f64 {
        match self {
            IncomeRange::Below25k => 25_000.0,
            IncomeRange::From25kTo50k => 37_500.0,
            IncomeRange::From50kTo100k => 75_000.0,
            IncomeRange::Above100k => 100_000.0,
        }
    }

    /// The onboarding form label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            IncomeRange::Below25k => "Below ₹25,000",
            IncomeRange::From25kTo50k => "₹25,000 - ₹50,000",
            IncomeRange::From50kTo100k => "₹50,000 - ₹1,00,000",
            IncomeRange::Above100k => "Above ₹1,00,000",
        }
    }
}

impl fmt::Display for IncomeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IncomeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Below ₹25,000" => Ok(IncomeRange::Below25k),
            "₹25,000 - ₹50,000" => Ok(IncomeRange::From25kTo50k),
            "₹50,000 - ₹1,00,000" => Ok(IncomeRange::From50kTo100k),
            "Above ₹1,00,000" => Ok(IncomeRange::Above100k),
            other => Err(Error::invalid_input(format!(
                "unknown income range '{other}'"
            ))),
        }
    }
}

/// Profile captured at onboarding. Immutable once onboarding completes
/// except by explicit replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub income_range: IncomeRange,
    pub monthly_expenses: String,
    pub dependents: u8,
    pub loan_status: String,
    pub financial_goals: Vec<String>,
    pub location: String,
    pub language: String,
}

impl UserProfile {
    /// Highest value accepted for `dependents`; 4 means "4 or more".
    pub const MAX_DEPENDENTS: u8 = 4;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        income_range: IncomeRange,
        monthly_expenses: impl Into<String>,
        dependents: u8,
        loan_status: impl Into<String>,
        financial_goals: Vec<String>,
        location: impl Into<String>,
        language: impl Into<String>,
    ) -> crate::errors::Result<Self> {
        if dependents > Self::MAX_DEPENDENTS {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "dependents must be between 0 and {}, got {dependents}",
                Self::MAX_DEPENDENTS
            ))));
        }
        Ok(UserProfile {
            name: name.into(),
            income_range,
            monthly_expenses: monthly_expenses.into(),
            dependents,
            loan_status: loan_status.into(),
            financial_goals,
            location: location.into(),
            language: language.into(),
        })
    }

    /// Whether the profile's stated financial goals include `goal`.
    pub fn has_goal(&self, goal: &str) -> bool {
        self.financial_goals.iter().any(|g| g == goal)
    }
}
