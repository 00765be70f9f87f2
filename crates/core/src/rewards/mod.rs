//! Rewards module - points ledger, achievements, and tiers.

mod rewards_model;
mod rewards_service;

pub use rewards_model::{Achievement, PointsEntry, PointsLedger, RewardAction, RewardTier};
pub use rewards_service::{
    achievement_catalog, add_points, current_tier, next_tier, record_action, tier_progress_pct,
    unlock_achievement, REWARD_TIERS,
};
