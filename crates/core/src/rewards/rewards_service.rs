//! Points, achievement, and tier operations.

use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

use crate::constants::POINTS_PER_LEVEL;
use crate::errors::{Error, Result};

use super::rewards_model::{Achievement, PointsEntry, PointsLedger, RewardAction, RewardTier};

/// Reward brackets in ascending points order. An exact boundary belongs to
/// the higher tier.
pub const REWARD_TIERS: &[RewardTier] = &[
    RewardTier { level: 1, name: "Beginner", points_required: 0 },
    RewardTier { level: 2, name: "Explorer", points_required: 100 },
    RewardTier { level: 3, name: "Achiever", points_required: 250 },
    RewardTier { level: 4, name: "Expert", points_required: 500 },
    RewardTier { level: 5, name: "Master", points_required: 1000 },
];

/// Awards points to the ledger and recomputes the derived level fields.
///
/// The new history entry is prepended; most-recent-first ordering is part
/// of the contract.
pub fn add_points(
    ledger: &mut PointsLedger,
    amount: u32,
    action: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    if amount == 0 {
        return Err(Error::invalid_input("points award must be positive, got 0"));
    }
    ledger.history.insert(
        0,
        PointsEntry {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            points: amount,
            timestamp: now,
        },
    );
    ledger.total += amount;
    ledger.level = ledger.total / POINTS_PER_LEVEL + 1;
    ledger.next_level_points = ledger.level * POINTS_PER_LEVEL;
    debug!(
        "awarded {amount} points for '{action}', total {} (level {})",
        ledger.total, ledger.level
    );
    Ok(())
}

/// Awards the fixed number of points tied to a completed user action.
pub fn record_action(
    ledger: &mut PointsLedger,
    action: RewardAction,
    now: DateTime<Utc>,
) -> Result<()> {
    add_points(ledger, action.points(), action.label(), now)
}

/// Unlocks an achievement by id. Unlocking an already-unlocked achievement
/// is a no-op and never re-stamps the timestamp.
pub fn unlock_achievement<'a>(
    achievements: &'a mut [Achievement],
    id: &str,
    now: DateTime<Utc>,
) -> Result<&'a Achievement> {
    let achievement = achievements
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| Error::invalid_input(format!("unknown achievement id '{id}'")))?;
    if !achievement.unlocked {
        achievement.unlocked = true;
        achievement.unlocked_at = Some(now);
        debug!("unlocked achievement '{}'", achievement.title);
    }
    Ok(achievement)
}

/// The highest tier whose threshold the total has reached.
pub fn current_tier(total: u32) -> &'static RewardTier {
    REWARD_TIERS
        .iter()
        .rev()
        .find(|tier| tier.points_required <= total)
        .unwrap_or(&REWARD_TIERS[0])
}

/// The next tier above the total, if any.
pub fn next_tier(total: u32) -> Option<&'static RewardTier> {
    REWARD_TIERS.iter().find(|tier| tier.points_required > total)
}

/// Progress from the current tier towards the next, as a percentage.
/// 100 once the top tier is reached.
pub fn tier_progress_pct(total: u32) -> f64 {
    let current = current_tier(total);
    match next_tier(total) {
        Some(next) => {
            let span = (next.points_required - current.points_required) as f64;
            (total - current.points_required) as f64 / span * 100.0
        }
        None => 100.0,
    }
}

/// The fixed six-entry achievement catalog, all locked.
pub fn achievement_catalog() -> Vec<Achievement> {
    let entries: [(&str, &str, &str, u32, &str); 6] = [
        ("1", "First Steps", "Complete your profile", 50, "🎯"),
        ("2", "Goal Setter", "Set your first financial goal", 30, "🏆"),
        ("3", "Curious Mind", "Ask 5 questions to FinPal", 40, "💡"),
        ("4", "Simulator Pro", "Run 3 simulations", 50, "📊"),
        ("5", "Decision Maker", "Analyze 3 financial decisions", 60, "⚖️"),
        ("6", "Weekly Warrior", "Use FinPal for 7 days", 100, "🔥"),
    ];
    entries
        .into_iter()
        .map(|(id, title, description, points, icon)| Achievement {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            points,
            icon: icon.to_string(),
            unlocked: false,
            unlocked_at: None,
        })
        .collect()
}
