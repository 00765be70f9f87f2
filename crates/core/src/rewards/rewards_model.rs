//! Rewards domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the points history. History is newest-first and
/// append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointsEntry {
    pub id: String,
    pub action: String,
    pub points: u32,
    pub timestamp: DateTime<Utc>,
}

/// The user's points total, derived level, and activity history.
///
/// `total` is monotonically non-decreasing; `level` and
/// `next_level_points` are derived from it on every award.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointsLedger {
    pub total: u32,
    pub level: u32,
    pub next_level_points: u32,
    pub history: Vec<PointsEntry>,
}

impl Default for PointsLedger {
    fn default() -> Self {
        PointsLedger {
            total: 0,
            level: 1,
            next_level_points: crate::constants::POINTS_PER_LEVEL,
            history: Vec::new(),
        }
    }
}

/// One achievement in the fixed catalog. Unlocking is one-way; the
/// timestamp is set once and never re-stamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub icon: String,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// A named reward bracket unlocked at a cumulative points threshold.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RewardTier {
    pub level: u32,
    pub name: &'static str,
    pub points_required: u32,
}

/// The fixed point awards tied to completed user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardAction {
    CompletedProfile,
    AddedGoal,
    AnalyzedDecision,
    RanSimulation,
    UpdatedGoalProgress,
    AskedQuestion,
}

impl RewardAction {
    pub fn points(&self) -> u32 {
        match self {
            RewardAction::CompletedProfile => 50,
            RewardAction::AddedGoal => 30,
            RewardAction::AnalyzedDecision => 20,
            RewardAction::RanSimulation => 15,
            RewardAction::UpdatedGoalProgress => 10,
            RewardAction::AskedQuestion => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RewardAction::CompletedProfile => "Completed profile setup",
            RewardAction::AddedGoal => "Added a new goal",
            RewardAction::AnalyzedDecision => "Analyzed a financial decision",
            RewardAction::RanSimulation => "Ran a simulation",
            RewardAction::UpdatedGoalProgress => "Updated goal progress",
            RewardAction::AskedQuestion => "Asked FinPal a question",
        }
    }
}
