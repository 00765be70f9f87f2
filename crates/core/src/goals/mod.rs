//! Goals module - domain models and tracking service.

mod goals_model;
mod goals_service;

pub use goals_model::{Goal, GoalCategory, GoalType};
pub use goals_service::{
    aggregate_progress, apply_contribution, default_goals, filter_by_type, suggest_goals,
    suggest_goals_today,
};
