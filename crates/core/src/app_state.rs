//! Process-wide application state.
//!
//! The single owner of the profile, goals, ledger, and achievement
//! catalog. The core assumes at most one in-flight mutation at a time;
//! callers exposing this to multiple threads must wrap the state in their
//! own mutual exclusion (e.g. a `Mutex<AppState>`) so read-modify-write
//! sequences on the ledger and goals stay serialized.

use chrono::{NaiveDate, Utc};

use crate::decisions::{self, DecisionImpact, DecisionRequest};
use crate::errors::{Error, Result};
use crate::goals::{self, Goal};
use crate::profile::UserProfile;
use crate::rewards::{self, Achievement, PointsLedger, RewardAction};

/// Achievement unlocked when onboarding completes.
const ACHIEVEMENT_FIRST_STEPS: &str = "1";
/// Achievement unlocked when the user adds their first goal.
const ACHIEVEMENT_GOAL_SETTER: &str = "2";

pub struct AppState {
    pub profile: Option<UserProfile>,
    pub goals: Vec<Goal>,
    pub ledger: PointsLedger,
    pub achievements: Vec<Achievement>,
}

impl AppState {
    /// Fresh state with the starter goals and the locked achievement
    /// catalog.
    pub fn new() -> Self {
        AppState {
            profile: None,
            goals: goals::default_goals(),
            ledger: PointsLedger::default(),
            achievements: rewards::achievement_catalog(),
        }
    }

    fn profile(&self) -> Result<&UserProfile> {
        self.profile
            .as_ref()
            .ok_or_else(|| Error::missing_field("profile"))
    }

    /// Stores the onboarding profile, awards the setup points, and unlocks
    /// the First Steps achievement.
    pub fn complete_onboarding(&mut self, profile: UserProfile) -> Result<()> {
        self.profile = Some(profile);
        let now = Utc::now();
        rewards::record_action(&mut self.ledger, RewardAction::CompletedProfile, now)?;
        rewards::unlock_achievement(&mut self.achievements, ACHIEVEMENT_FIRST_STEPS, now)?;
        Ok(())
    }

    /// Replaces the stored profile. Profiles are immutable between
    /// explicit replacements.
    pub fn replace_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Runs the decision analyzer against the stored profile and awards
    /// the analysis points.
    pub fn analyze_decision(&mut self, request: &DecisionRequest) -> Result<DecisionImpact> {
        let impact = decisions::analyze_decision(request, self.profile()?)?;
        rewards::record_action(&mut self.ledger, RewardAction::AnalyzedDecision, Utc::now())?;
        Ok(impact)
    }

    /// Awards the points for running an interest-model simulation. The
    /// formula calls themselves are pure and free-standing.
    pub fn record_simulation(&mut self) -> Result<()> {
        rewards::record_action(&mut self.ledger, RewardAction::RanSimulation, Utc::now())
    }

    /// Applies a contribution to the identified goal and awards the
    /// progress points.
    pub fn contribute_to_goal(&mut self, goal_id: &str, amount: f64) -> Result<&Goal> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| Error::invalid_input(format!("unknown goal id '{goal_id}'")))?;
        goals::apply_contribution(&mut self.goals[index], amount)?;
        rewards::record_action(
            &mut self.ledger,
            RewardAction::UpdatedGoalProgress,
            Utc::now(),
        )?;
        Ok(&self.goals[index])
    }

    /// Suggested goals the user has not yet adopted.
    pub fn suggested_goals(&self, today: NaiveDate) -> Result<Vec<Goal>> {
        Ok(goals::suggest_goals(self.profile()?, &self.goals, today))
    }

    /// Adopts a suggested goal: appends it, awards the points, and unlocks
    /// the Goal Setter achievement.
    pub fn add_suggested_goal(&mut self, goal: Goal) -> Result<()> {
        self.goals.push(goal);
        let now = Utc::now();
        rewards::record_action(&mut self.ledger, RewardAction::AddedGoal, now)?;
        rewards::unlock_achievement(&mut self.achievements, ACHIEVEMENT_GOAL_SETTER, now)?;
        Ok(())
    }

    /// Overall goal progress percentage.
    pub fn overall_progress(&self) -> f64 {
        goals::aggregate_progress(&self.goals)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decisions::DecisionKind;
    use crate::profile::IncomeRange;

    fn sample_profile() -> UserProfile {
        UserProfile::new(
            "Asha",
            IncomeRange::From50kTo100k,
            "₹20,000 - ₹40,000",
            2,
            "Home loan",
            vec!["Retirement".to_string()],
            "Pune",
            "en",
        )
        .unwrap()
    }

    #[test]
    fn onboarding_awards_points_and_unlocks_first_steps() {
        let mut state = AppState::new();
        state.complete_onboarding(sample_profile()).unwrap();

        assert!(state.profile.is_some());
        assert_eq!(state.ledger.total, 50);
        assert_eq!(state.ledger.history[0].action, "Completed profile setup");
        let first_steps = state.achievements.iter().find(|a| a.id == "1").unwrap();
        assert!(first_steps.unlocked);
    }

    #[test]
    fn analysis_requires_a_profile() {
        let mut state = AppState::new();
        let request = DecisionRequest::new(DecisionKind::Sip, 5_000.0, Some(12)).unwrap();
        assert!(state.analyze_decision(&request).is_err());
        assert_eq!(state.ledger.total, 0);
    }

    #[test]
    fn successful_analysis_reports_to_ledger() {
        let mut state = AppState::new();
        state.complete_onboarding(sample_profile()).unwrap();
        let request = DecisionRequest::new(DecisionKind::Emi, 600_000.0, Some(36)).unwrap();

        let impact = state.analyze_decision(&request).unwrap();
        assert!(impact.emi_amount.is_some());
        assert_eq!(state.ledger.total, 70);
        assert_eq!(
            state.ledger.history[0].action,
            "Analyzed a financial decision"
        );
    }

    #[test]
    fn contribution_awards_progress_points() {
        let mut state = AppState::new();
        let before = state.goals[0].current_amount;

        let goal = state.contribute_to_goal("1", 5_000.0).unwrap();
        assert_eq!(goal.current_amount, before + 5_000.0);
        assert_eq!(state.ledger.total, 10);
    }

    #[test]
    fn contribution_to_unknown_goal_is_rejected() {
        let mut state = AppState::new();
        assert!(state.contribute_to_goal("missing", 5_000.0).is_err());
        assert_eq!(state.ledger.total, 0);
    }

    #[test]
    fn adopting_a_suggestion_unlocks_goal_setter() {
        let mut state = AppState::new();
        state.complete_onboarding(sample_profile()).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let suggestions = state.suggested_goals(today).unwrap();
        let goal_count = state.goals.len();
        state
            .add_suggested_goal(suggestions.into_iter().next().unwrap())
            .unwrap();

        assert_eq!(state.goals.len(), goal_count + 1);
        let goal_setter = state.achievements.iter().find(|a| a.id == "2").unwrap();
        assert!(goal_setter.unlocked);
        assert_eq!(state.ledger.history[0].action, "Added a new goal");
    }

    #[test]
    fn simulation_points_accumulate() {
        let mut state = AppState::new();
        state.record_simulation().unwrap();
        state.record_simulation().unwrap();
        assert_eq!(state.ledger.total, 30);
    }
}
