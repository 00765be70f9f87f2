//! Goals domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Savings horizon of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    #[serde(rename = "short-term")]
    ShortTerm,
    #[serde(rename = "long-term")]
    LongTerm,
}

/// What the goal is saving towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Savings,
    Investment,
    Debt,
    Emergency,
}

/// Domain model representing a savings goal.
///
/// Invariant: `current_amount` never exceeds `target_amount`; contributions
/// are clamped at the target. Goals are never deleted by this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub category: GoalCategory,
    pub icon: String,
}

impl Goal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        deadline: NaiveDate,
        goal_type: GoalType,
        category: GoalCategory,
        icon: impl Into<String>,
    ) -> Result<Self> {
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(Error::invalid_input(format!(
                "target amount must be positive, got {target_amount}"
            )));
        }
        if !current_amount.is_finite() || current_amount < 0.0 || current_amount > target_amount {
            return Err(Error::invalid_input(format!(
                "current amount must be between 0 and {target_amount}, got {current_amount}"
            )));
        }
        Ok(Goal {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            target_amount,
            current_amount,
            deadline,
            goal_type,
            category,
            icon: icon.into(),
        })
    }

    /// Progress towards the target, as a percentage.
    pub fn progress_pct(&self) -> f64 {
        self.current_amount / self.target_amount * 100.0
    }

    /// Amount still needed to reach the target.
    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_amount
    }
}
