//! Property-based tests for the calculation core.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;

use finpal_core::goals::{aggregate_progress, apply_contribution, Goal, GoalCategory, GoalType};
use finpal_core::interest::{emi, total_loan_interest};
use finpal_core::rewards::{add_points, PointsLedger};

// =============================================================================
// Generators
// =============================================================================

/// Generates a goal with a valid target and starting amount.
fn arb_goal() -> impl Strategy<Value = Goal> {
    (1.0f64..10_000_000.0, 0.0f64..1.0).prop_map(|(target, fill)| {
        Goal::new(
            "g",
            "Generated Goal",
            "",
            target,
            target * fill,
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            GoalType::ShortTerm,
            GoalCategory::Savings,
            "🎯",
        )
        .unwrap()
    })
}

/// Generates a sequence of positive contribution amounts.
fn arb_contributions(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.01f64..500_000.0, 0..=max_len)
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After any number of contributions, a goal's current amount stays
    /// within `[0, target_amount]`.
    #[test]
    fn prop_contributions_never_exceed_target(
        goal in arb_goal(),
        amounts in arb_contributions(20),
    ) {
        let mut goal = goal;
        for amount in amounts {
            apply_contribution(&mut goal, amount).unwrap();
            prop_assert!(goal.current_amount >= 0.0);
            prop_assert!(goal.current_amount <= goal.target_amount);
        }
    }

    /// Aggregate progress is always within `[0, 100]` for valid goals.
    #[test]
    fn prop_aggregate_progress_bounded(
        goals in proptest::collection::vec(arb_goal(), 0..10),
    ) {
        let progress = aggregate_progress(&goals);
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    /// A zero-rate loan amortizes to exactly principal / months.
    #[test]
    fn prop_zero_rate_emi_is_straight_line(
        principal in 1.0f64..10_000_000.0,
        months in 1u32..600,
    ) {
        let installment = emi(principal, 0.0, months).unwrap();
        prop_assert_eq!(installment, principal / months as f64);
    }

    /// Total loan interest always equals EMI times tenure less principal.
    #[test]
    fn prop_total_interest_identity(
        principal in 1.0f64..10_000_000.0,
        rate in 0.0f64..30.0,
        months in 1u32..600,
    ) {
        let installment = emi(principal, rate, months).unwrap();
        let interest = total_loan_interest(principal, rate, months).unwrap();
        prop_assert!((interest - (installment * months as f64 - principal)).abs() < 1e-6);
    }

    /// The ledger total is the sum of all awards regardless of how they
    /// are split, and never decreases.
    #[test]
    fn prop_ledger_total_is_order_independent_sum(
        awards in proptest::collection::vec(1u32..500, 1..20),
    ) {
        let now = Utc::now();
        let mut ledger = PointsLedger::default();
        let mut previous_total = 0;
        for &award in &awards {
            add_points(&mut ledger, award, "test action", now).unwrap();
            prop_assert!(ledger.total > previous_total);
            previous_total = ledger.total;
        }

        let sum: u32 = awards.iter().sum();
        prop_assert_eq!(ledger.total, sum);
        prop_assert_eq!(ledger.level, sum / 100 + 1);
        prop_assert_eq!(ledger.next_level_points, ledger.level * 100);
        prop_assert_eq!(ledger.history.len(), awards.len());
    }
}
