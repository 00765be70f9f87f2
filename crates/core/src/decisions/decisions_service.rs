//! Decision impact analyzer.
//!
//! Turns a proposed purchase or investment into derived metrics and a
//! ranked list of insights. The EMI approximation here is a flat
//! principal-plus-interest multiplier and is intentionally NOT the
//! amortized formula in [`crate::interest::emi`]; the app uses both,
//! unreconciled.

use log::debug;

use crate::constants::{
    ANNUAL_INFLATION_RATE, BENCHMARK_ANNUAL_RETURN, EMI_BURDEN_CAUTION_PCT,
    EMI_BURDEN_WARNING_PCT, FLAT_EMI_MULTIPLIER,
};
use crate::errors::Result;
use crate::profile::UserProfile;

use super::decisions_model::{
    DecisionImpact, DecisionInsight, DecisionKind, DecisionRequest, InsightSeverity,
};

/// Everything an insight rule may look at.
struct InsightContext<'a> {
    kind: DecisionKind,
    amount: f64,
    emi_burden_pct: Option<f64>,
    profile: &'a UserProfile,
}

/// Insight rules, evaluated in this fixed order. Each rule independently
/// emits zero or one insight; the resulting order is the display order.
const INSIGHT_RULES: &[fn(&InsightContext) -> Option<DecisionInsight>] = &[
    emi_burden_rule,
    sip_compounding_rule,
    opportunity_cost_rule,
    emergency_fund_rule,
];

fn emi_burden_rule(ctx: &InsightContext) -> Option<DecisionInsight> {
    let burden = ctx.emi_burden_pct?;
    let insight = if burden > EMI_BURDEN_WARNING_PCT {
        DecisionInsight {
            severity: InsightSeverity::Warning,
            message: format!(
                "Your EMI burden would be {burden:.0}% of income. \
                 Experts recommend keeping it below 40%."
            ),
        }
    } else if burden > EMI_BURDEN_CAUTION_PCT {
        DecisionInsight {
            severity: InsightSeverity::Info,
            message: format!(
                "EMI burden of {burden:.0}% is manageable but leaves less room for savings."
            ),
        }
    } else {
        DecisionInsight {
            severity: InsightSeverity::Success,
            message: format!(
                "EMI burden of {burden:.0}% is within healthy limits for your income."
            ),
        }
    };
    Some(insight)
}

fn sip_compounding_rule(ctx: &InsightContext) -> Option<DecisionInsight> {
    if ctx.kind != DecisionKind::Sip {
        return None;
    }
    Some(DecisionInsight {
        severity: InsightSeverity::Success,
        message: format!(
            "Starting early with SIP can leverage compounding. \
             Even ₹{:.0} a month can grow significantly over time.",
            ctx.amount
        ),
    })
}

fn opportunity_cost_rule(_ctx: &InsightContext) -> Option<DecisionInsight> {
    Some(DecisionInsight {
        severity: InsightSeverity::Info,
        message: "The opportunity cost of this decision is what you could earn \
                  if you invested this amount instead."
            .to_string(),
    })
}

// Fires whenever the profile merely lists an emergency fund goal, whether
// or not that goal is already funded.
fn emergency_fund_rule(ctx: &InsightContext) -> Option<DecisionInsight> {
    if !ctx.profile.has_goal("Emergency Fund") {
        return None;
    }
    Some(DecisionInsight {
        severity: InsightSeverity::Warning,
        message: "Consider your emergency fund goal before committing. \
                  It's wise to have 3-6 months expenses saved first."
            .to_string(),
    })
}

/// Analyzes a decision request against a user profile.
///
/// EMI and SIP kinds get a kind-specific metric; every kind gets the
/// universal opportunity-cost and inflation-erosion metrics.
pub fn analyze_decision(request: &DecisionRequest, profile: &UserProfile) -> Result<DecisionImpact> {
    request.validate()?;

    let monthly_income = profile.income_range.representative_monthly_income();
    let duration = request.effective_duration_months() as f64;

    let (emi_amount, emi_burden_pct) = if request.kind == DecisionKind::Emi {
        let installment = request.amount * FLAT_EMI_MULTIPLIER / duration;
        (
            Some(installment),
            Some(installment / monthly_income * 100.0),
        )
    } else {
        (None, None)
    };

    let sip_returns = if request.kind == DecisionKind::Sip {
        let invested = request.amount * duration;
        let monthly_growth = 1.0 + BENCHMARK_ANNUAL_RETURN / 12.0;
        Some(invested * monthly_growth.powf(duration) - invested)
    } else {
        None
    };

    let opportunity_cost = request.amount * BENCHMARK_ANNUAL_RETURN * (duration / 12.0);
    let inflation_erosion = request.amount * ANNUAL_INFLATION_RATE;

    let ctx = InsightContext {
        kind: request.kind,
        amount: request.amount,
        emi_burden_pct,
        profile,
    };
    let insights: Vec<DecisionInsight> =
        INSIGHT_RULES.iter().filter_map(|rule| rule(&ctx)).collect();

    debug!(
        "analyzed {:?} decision for amount {} over {} months: {} insights",
        request.kind,
        request.amount,
        duration,
        insights.len()
    );

    Ok(DecisionImpact {
        monthly_income,
        emi_amount,
        emi_burden_pct,
        sip_returns,
        opportunity_cost,
        inflation_erosion,
        insights,
    })
}
