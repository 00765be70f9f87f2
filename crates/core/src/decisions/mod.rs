//! Decision impact module - models and analyzer service.

mod decisions_model;
mod decisions_service;

pub use decisions_model::{
    DecisionImpact, DecisionInsight, DecisionKind, DecisionRequest, InsightSeverity,
};
pub use decisions_service::analyze_decision;
