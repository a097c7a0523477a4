//! Go/No-Go synthesis.
//!
//! The recommendation comes from [`DECISION_RULES`], an ordered list of
//! guards evaluated top down. Everything else in a [`GoNoGoRecommendation`]
//! is templated from the chosen outcome and the input counts.

pub mod templates;

use crate::assessment::{CapacityRating, ConfidenceLevel};
use crate::classification::RiskLevel;
use crate::config::DecisionThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Go,
    ConditionalGo,
    NoGo,
    MajorRedesignRequired,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Go => "GO",
            Recommendation::ConditionalGo => "CONDITIONAL_GO",
            Recommendation::NoGo => "NO_GO",
            Recommendation::MajorRedesignRequired => "MAJOR_REDESIGN_REQUIRED",
        }
    }

    /// Whether the release may proceed, possibly with conditions.
    pub fn allows_deployment(&self) -> bool {
        matches!(self, Recommendation::Go | Recommendation::ConditionalGo)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the decision rules and templates read.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionInputs {
    pub health_score: f64,
    pub overall_risk: RiskLevel,
    pub confidence: ConfidenceLevel,
    pub capacity: CapacityRating,
    pub estimated_users: u32,
    pub target_users: u32,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub high_issues: usize,
    pub deployment_blockers: usize,
    pub fix_days: f64,
}

pub type Guard = fn(&DecisionInputs, &DecisionThresholds) -> bool;

pub struct DecisionRule {
    pub name: &'static str,
    pub applies: Guard,
    pub outcome: Recommendation,
}

impl fmt::Debug for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionRule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

fn has_blockers(inputs: &DecisionInputs, _: &DecisionThresholds) -> bool {
    inputs.deployment_blockers > 0
}

fn health_needs_redesign(inputs: &DecisionInputs, t: &DecisionThresholds) -> bool {
    inputs.health_score < t.redesign_health_below
}

fn critical_risk(inputs: &DecisionInputs, _: &DecisionThresholds) -> bool {
    inputs.overall_risk == RiskLevel::Critical
}

fn insufficient_capacity(inputs: &DecisionInputs, _: &DecisionThresholds) -> bool {
    inputs.capacity == CapacityRating::Insufficient
}

fn has_reservations(inputs: &DecisionInputs, t: &DecisionThresholds) -> bool {
    inputs.health_score < t.conditional_health_below
        || inputs.overall_risk == RiskLevel::High
        || inputs.confidence == ConfidenceLevel::Low
        || inputs.capacity == CapacityRating::LimitedCapacity
}

fn always(_: &DecisionInputs, _: &DecisionThresholds) -> bool {
    true
}

/// Decision rules in precedence order. The last rule always applies.
pub const DECISION_RULES: &[DecisionRule] = &[
    DecisionRule {
        name: "deployment_blockers",
        applies: has_blockers,
        outcome: Recommendation::NoGo,
    },
    DecisionRule {
        name: "health_below_redesign_threshold",
        applies: health_needs_redesign,
        outcome: Recommendation::MajorRedesignRequired,
    },
    DecisionRule {
        name: "critical_overall_risk",
        applies: critical_risk,
        outcome: Recommendation::NoGo,
    },
    DecisionRule {
        name: "insufficient_capacity",
        applies: insufficient_capacity,
        outcome: Recommendation::NoGo,
    },
    DecisionRule {
        name: "conditional_reservations",
        applies: has_reservations,
        outcome: Recommendation::ConditionalGo,
    },
    DecisionRule {
        name: "ready",
        applies: always,
        outcome: Recommendation::Go,
    },
];

/// The first rule whose guard holds.
pub fn select_rule(
    inputs: &DecisionInputs,
    thresholds: &DecisionThresholds,
) -> &'static DecisionRule {
    DECISION_RULES
        .iter()
        .find(|rule| (rule.applies)(inputs, thresholds))
        .unwrap_or(&DECISION_RULES[DECISION_RULES.len() - 1])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoNoGoRecommendation {
    pub recommendation: Recommendation,
    pub rule_applied: String,
    pub justification: String,
    pub conditions: Vec<String>,
    pub timeline: String,
    pub next_steps: Vec<String>,
    pub rollback_plan: Vec<String>,
    pub monitoring_requirements: Vec<String>,
    pub success_criteria: Vec<String>,
}

pub fn synthesize(inputs: &DecisionInputs, thresholds: &DecisionThresholds) -> GoNoGoRecommendation {
    let rule = select_rule(inputs, thresholds);
    let outcome = rule.outcome;

    tracing::info!(
        recommendation = %outcome,
        rule = rule.name,
        health_score = inputs.health_score,
        blockers = inputs.deployment_blockers,
        "Decision reached"
    );

    GoNoGoRecommendation {
        recommendation: outcome,
        rule_applied: rule.name.to_string(),
        justification: templates::justification(outcome, rule.name, inputs),
        conditions: templates::conditions(outcome, inputs, thresholds),
        timeline: templates::timeline(outcome, inputs),
        next_steps: templates::next_steps(outcome, inputs),
        rollback_plan: templates::rollback_plan(outcome),
        monitoring_requirements: templates::monitoring_requirements(outcome, inputs),
        success_criteria: templates::success_criteria(outcome, inputs),
    }
}
