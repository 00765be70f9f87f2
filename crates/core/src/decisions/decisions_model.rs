//! Decision analysis domain models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DECISION_DURATION_MONTHS;
use crate::errors::{Error, Result};

/// The kind of financial decision being considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Emi,
    Sip,
    Expense,
    Vehicle,
    Property,
    Gadget,
}

impl DecisionKind {
    /// Whether this kind requires an explicit duration from the caller.
    pub fn requires_duration(&self) -> bool {
        matches!(self, DecisionKind::Emi | DecisionKind::Sip)
    }
}

impl FromStr for DecisionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "emi" => Ok(DecisionKind::Emi),
            "sip" => Ok(DecisionKind::Sip),
            "expense" => Ok(DecisionKind::Expense),
            "vehicle" => Ok(DecisionKind::Vehicle),
            "property" => Ok(DecisionKind::Property),
            "gadget" => Ok(DecisionKind::Gadget),
            other => Err(Error::invalid_input(format!(
                "unknown decision kind '{other}'"
            ))),
        }
    }
}

/// A proposed purchase or investment to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub kind: DecisionKind,
    pub amount: f64,
    pub duration_months: Option<u32>,
}

impl DecisionRequest {
    pub fn new(kind: DecisionKind, amount: f64, duration_months: Option<u32>) -> Result<Self> {
        let request = DecisionRequest {
            kind,
            amount,
            duration_months,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::invalid_input(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        match self.duration_months {
            Some(0) => Err(Error::invalid_input("duration must be positive, got 0")),
            None if self.kind.requires_duration() => Err(Error::missing_field("durationMonths")),
            _ => Ok(()),
        }
    }

    /// Duration used for the universal metrics. Kinds that do not take a
    /// duration input are analyzed over a one-year default horizon.
    pub fn effective_duration_months(&self) -> u32 {
        self.duration_months
            .unwrap_or(DEFAULT_DECISION_DURATION_MONTHS)
    }
}

/// Display severity of a single insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Success,
    Warning,
    Info,
}

/// One ranked insight produced by the analyzer. List order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInsight {
    pub severity: InsightSeverity,
    pub message: String,
}

/// Derived metrics and ranked insights for a decision. Purely computed,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionImpact {
    pub monthly_income: f64,
    pub emi_amount: Option<f64>,
    pub emi_burden_pct: Option<f64>,
    pub sip_returns: Option<f64>,
    pub opportunity_cost: f64,
    pub inflation_erosion: f64,
    pub insights: Vec<DecisionInsight>,
}
