//! Goal tracking operations: contributions, aggregation, and suggestions.

use chrono::{Duration, NaiveDate, Utc};
use log::debug;
use uuid::Uuid;

use crate::constants::{DAYS_PER_MONTH_APPROX, MAX_GOAL_SUGGESTIONS};
use crate::errors::{Error, Result};
use crate::profile::UserProfile;

use super::goals_model::{Goal, GoalCategory, GoalType};

/// Applies a contribution to a goal, clamping at the target amount.
pub fn apply_contribution(goal: &mut Goal, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::invalid_input(format!(
            "contribution must be positive, got {amount}"
        )));
    }
    goal.current_amount = (goal.current_amount + amount).min(goal.target_amount);
    debug!(
        "contributed {} to goal '{}', now at {:.1}%",
        amount,
        goal.title,
        goal.progress_pct()
    );
    Ok(())
}

/// Overall progress across a set of goals, as a percentage.
///
/// Unweighted mean of each goal's own percentage; a small goal counts as
/// much as a large one. Returns 0 for an empty set.
pub fn aggregate_progress(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    goals.iter().map(Goal::progress_pct).sum::<f64>() / goals.len() as f64
}

/// Goals of the given type, preserving the original order.
pub fn filter_by_type(goals: &[Goal], goal_type: GoalType) -> Vec<Goal> {
    goals
        .iter()
        .filter(|g| g.goal_type == goal_type)
        .cloned()
        .collect()
}

struct SuggestionTemplate {
    title: &'static str,
    description: &'static str,
    target_amount: f64,
    goal_type: GoalType,
    category: GoalCategory,
    icon: &'static str,
    months: i64,
}

fn materialize(template: SuggestionTemplate, today: NaiveDate) -> Goal {
    let deadline = today + Duration::days(template.months * DAYS_PER_MONTH_APPROX);
    Goal {
        id: Uuid::new_v4().to_string(),
        title: template.title.to_string(),
        description: template.description.to_string(),
        target_amount: template.target_amount,
        current_amount: 0.0,
        deadline,
        goal_type: template.goal_type,
        category: template.category,
        icon: template.icon.to_string(),
    }
}

/// Suggests up to three new goals based on the user's stated intentions.
///
/// Priority order: an emergency fund if the profile does not already list
/// one, a retirement corpus if retirement is a stated goal, then a generic
/// learning fund filler. Deadlines use a 30-day month approximation.
pub fn suggest_goals(profile: &UserProfile, _existing: &[Goal], today: NaiveDate) -> Vec<Goal> {
    let mut suggestions = Vec::new();

    if !profile.has_goal("Emergency Fund") {
        suggestions.push(materialize(
            SuggestionTemplate {
                title: "Emergency Fund",
                description: "Save 3-6 months of expenses",
                target_amount: 100_000.0,
                goal_type: GoalType::ShortTerm,
                category: GoalCategory::Emergency,
                icon: "🛡️",
                months: 12,
            },
            today,
        ));
    }

    if profile.has_goal("Retirement") {
        suggestions.push(materialize(
            SuggestionTemplate {
                title: "Retirement Corpus",
                description: "Start building long-term wealth",
                target_amount: 5_000_000.0,
                goal_type: GoalType::LongTerm,
                category: GoalCategory::Investment,
                icon: "🏖️",
                months: 240,
            },
            today,
        ));
    }

    suggestions.push(materialize(
        SuggestionTemplate {
            title: "Learning Fund",
            description: "Invest in your skills",
            target_amount: 25_000.0,
            goal_type: GoalType::ShortTerm,
            category: GoalCategory::Savings,
            icon: "📚",
            months: 6,
        },
        today,
    ));

    suggestions.truncate(MAX_GOAL_SUGGESTIONS);
    suggestions
}

/// Convenience wrapper over [`suggest_goals`] using today's date.
pub fn suggest_goals_today(profile: &UserProfile, existing: &[Goal]) -> Vec<Goal> {
    suggest_goals(profile, existing, Utc::now().date_naive())
}

/// The starter goals every new user begins with.
pub fn default_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            title: "Emergency Fund".to_string(),
            description: "Build 3 months of expenses".to_string(),
            target_amount: 90_000.0,
            current_amount: 25_000.0,
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date"),
            goal_type: GoalType::ShortTerm,
            category: GoalCategory::Emergency,
            icon: "🛡️".to_string(),
        },
        Goal {
            id: "2".to_string(),
            title: "Vacation Fund".to_string(),
            description: "Save for annual family vacation".to_string(),
            target_amount: 50_000.0,
            current_amount: 12_000.0,
            deadline: NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date"),
            goal_type: GoalType::ShortTerm,
            category: GoalCategory::Savings,
            icon: "✈️".to_string(),
        },
        Goal {
            id: "3".to_string(),
            title: "Retirement Corpus".to_string(),
            description: "Build long-term wealth".to_string(),
            target_amount: 10_000_000.0,
            current_amount: 350_000.0,
            deadline: NaiveDate::from_ymd_opt(2045, 12, 31).expect("valid date"),
            goal_type: GoalType::LongTerm,
            category: GoalCategory::Investment,
            icon: "🏖️".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::IncomeRange;

    fn sample_goal(target: f64, current: f64) -> Goal {
        Goal::new(
            "g1",
            "Vacation Fund",
            "Save for annual family vacation",
            target,
            current,
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            GoalType::ShortTerm,
            GoalCategory::Savings,
            "✈️",
        )
        .unwrap()
    }

    fn profile_with_goals(goals: &[&str]) -> UserProfile {
        UserProfile::new(
            "Meera",
            IncomeRange::From25kTo50k,
            "₹10,000 - ₹20,000",
            0,
            "No loans",
            goals.iter().map(|g| g.to_string()).collect(),
            "Delhi",
            "en",
        )
        .unwrap()
    }

    #[test]
    fn contribution_accumulates() {
        let mut goal = sample_goal(50_000.0, 10_000.0);
        apply_contribution(&mut goal, 5_000.0).unwrap();
        assert_eq!(goal.current_amount, 15_000.0);
    }

    #[test]
    fn contribution_clamps_at_target() {
        let mut goal = sample_goal(50_000.0, 48_000.0);
        apply_contribution(&mut goal, 10_000.0).unwrap();
        assert_eq!(goal.current_amount, 50_000.0);
    }

    #[test]
    fn contribution_must_be_positive() {
        let mut goal = sample_goal(50_000.0, 10_000.0);
        assert!(apply_contribution(&mut goal, 0.0).is_err());
        assert!(apply_contribution(&mut goal, -100.0).is_err());
        assert_eq!(goal.current_amount, 10_000.0);
    }

    #[test]
    fn aggregate_progress_of_empty_set_is_zero() {
        assert_eq!(aggregate_progress(&[]), 0.0);
    }

    #[test]
    fn aggregate_progress_single_goal_at_half() {
        let goals = vec![sample_goal(50_000.0, 25_000.0)];
        assert_eq!(aggregate_progress(&goals), 50.0);
    }

    #[test]
    fn aggregate_progress_is_unweighted() {
        // A tiny goal at 100% and a huge goal at 0% average to 50%.
        let goals = vec![sample_goal(100.0, 100.0), sample_goal(1_000_000.0, 0.0)];
        assert_eq!(aggregate_progress(&goals), 50.0);
    }

    #[test]
    fn filter_preserves_order() {
        let mut long = sample_goal(100.0, 0.0);
        long.goal_type = GoalType::LongTerm;
        long.id = "g2".to_string();
        let goals = vec![sample_goal(50.0, 0.0), long, sample_goal(75.0, 0.0)];

        let short_term = filter_by_type(&goals, GoalType::ShortTerm);
        assert_eq!(short_term.len(), 2);
        assert_eq!(short_term[0].target_amount, 50.0);
        assert_eq!(short_term[1].target_amount, 75.0);
    }

    #[test]
    fn suggestions_for_retirement_profile() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let profile = profile_with_goals(&["Retirement"]);
        let suggestions = suggest_goals(&profile, &[], today);

        let titles: Vec<&str> = suggestions.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Emergency Fund", "Retirement Corpus", "Learning Fund"]);
    }

    #[test]
    fn emergency_fund_not_suggested_when_already_listed() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let profile = profile_with_goals(&["Emergency Fund"]);
        let suggestions = suggest_goals(&profile, &[], today);

        let titles: Vec<&str> = suggestions.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Learning Fund"]);
    }

    #[test]
    fn suggestion_deadlines_use_thirty_day_months() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let profile = profile_with_goals(&[]);
        let suggestions = suggest_goals(&profile, &[], today);

        // Emergency Fund: 12 months * 30 days = 360 days out.
        assert_eq!(
            suggestions[0].deadline,
            today + Duration::days(12 * DAYS_PER_MONTH_APPROX)
        );
        assert_eq!(suggestions[0].current_amount, 0.0);
    }

    #[test]
    fn never_more_than_three_suggestions() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let profile = profile_with_goals(&["Retirement"]);
        assert!(suggest_goals(&profile, &[], today).len() <= MAX_GOAL_SUGGESTIONS);
    }

    #[test]
    fn default_goals_seed_set() {
        let goals = default_goals();
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].title, "Emergency Fund");
        assert_eq!(goals[2].category, GoalCategory::Investment);
        // Seed data honors the clamp invariant.
        for goal in &goals {
            assert!(goal.current_amount <= goal.target_amount);
        }
    }
}
