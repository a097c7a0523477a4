//! Text attached to a recommendation. Pure functions of the outcome and the
//! decision inputs; no decision logic lives here.

use super::{DecisionInputs, Recommendation};
use crate::assessment::{format_fix_time, CapacityRating, ConfidenceLevel};
use crate::classification::RiskLevel;
use crate::config::DecisionThresholds;

pub fn justification(outcome: Recommendation, rule: &str, inputs: &DecisionInputs) -> String {
    let summary = format!(
        "health score {:.0}/100, overall risk {}, confidence {}, capacity {} ({} of {} target users)",
        inputs.health_score,
        inputs.overall_risk,
        inputs.confidence,
        inputs.capacity,
        inputs.estimated_users,
        inputs.target_users
    );

    match (outcome, rule) {
        (Recommendation::NoGo, "deployment_blockers") => format!(
            "{} deployment blocker(s) must be resolved before release; {summary}",
            inputs.deployment_blockers
        ),
        (Recommendation::NoGo, "insufficient_capacity") => format!(
            "Capacity cannot serve the target load; {summary}"
        ),
        (Recommendation::NoGo, _) => {
            format!("Overall risk is critical and must be reduced before release; {summary}")
        }
        (Recommendation::MajorRedesignRequired, _) => format!(
            "System health is too low for incremental fixes across {} issue(s); {summary}",
            inputs.total_issues
        ),
        (Recommendation::ConditionalGo, _) => format!(
            "Release is possible once the listed conditions are met; {summary}"
        ),
        (Recommendation::Go, _) => format!("All readiness checks passed; {summary}"),
    }
}

/// Conditions a CONDITIONAL_GO release must satisfy. Empty for other outcomes.
pub fn conditions(
    outcome: Recommendation,
    inputs: &DecisionInputs,
    thresholds: &DecisionThresholds,
) -> Vec<String> {
    if outcome != Recommendation::ConditionalGo {
        return Vec::new();
    }

    let mut out = Vec::new();
    if inputs.health_score < thresholds.conditional_health_below {
        out.push(format!(
            "Raise the health score to at least {:.0} (currently {:.0})",
            thresholds.conditional_health_below, inputs.health_score
        ));
    }
    if inputs.overall_risk >= RiskLevel::High {
        out.push("Reduce overall risk to MEDIUM or lower".to_string());
    }
    if inputs.confidence == ConfidenceLevel::Low {
        out.push("Re-run any failed audit phases and attach evidence to findings".to_string());
    }
    if inputs.capacity == CapacityRating::LimitedCapacity {
        out.push(format!(
            "Demonstrate capacity for {} concurrent users under load testing (estimated {})",
            inputs.target_users, inputs.estimated_users
        ));
    }
    if inputs.high_issues > 0 {
        out.push(format!(
            "Resolve or accept the {} HIGH priority issue(s)",
            inputs.high_issues
        ));
    }
    out
}

pub fn timeline(outcome: Recommendation, inputs: &DecisionInputs) -> String {
    let fix_time = format_fix_time(inputs.fix_days);
    match outcome {
        Recommendation::Go => "Ready for immediate deployment".to_string(),
        Recommendation::ConditionalGo => {
            format!("Deploy after conditions are met (estimated {fix_time} plus 2 days verification)")
        }
        Recommendation::NoGo => {
            format!("Re-assess after fixes (estimated {fix_time} plus 1 week stabilization)")
        }
        Recommendation::MajorRedesignRequired => {
            "Deployment date to be set after the redesign is scoped".to_string()
        }
    }
}

pub fn next_steps(outcome: Recommendation, inputs: &DecisionInputs) -> Vec<String> {
    let mut steps = Vec::new();
    match outcome {
        Recommendation::Go => {
            steps.push("Schedule the production release window".to_string());
            steps.push("Notify support and on-call teams of the release".to_string());
        }
        Recommendation::ConditionalGo => {
            steps.push("Assign owners to each release condition".to_string());
            steps.push("Plan a staged rollout starting with a small user cohort".to_string());
        }
        Recommendation::NoGo => {
            if inputs.deployment_blockers > 0 {
                steps.push(format!(
                    "Fix the {} deployment blocker(s) first",
                    inputs.deployment_blockers
                ));
            }
            if inputs.critical_issues > 0 {
                steps.push(format!(
                    "Resolve the {} CRITICAL priority issue(s)",
                    inputs.critical_issues
                ));
            }
            steps.push("Re-run the full readiness audit after fixes land".to_string());
        }
        Recommendation::MajorRedesignRequired => {
            steps.push("Run an architecture review of the affected subsystems".to_string());
            steps.push("Produce a redesign plan with revised delivery estimates".to_string());
            steps.push("Re-run the readiness audit against the redesigned build".to_string());
        }
    }
    steps
}

pub fn rollback_plan(outcome: Recommendation) -> Vec<String> {
    if !outcome.allows_deployment() {
        return vec!["No deployment planned; keep the current production version".to_string()];
    }

    let mut plan = vec![
        "Keep the previous app build available for immediate rollback".to_string(),
        "Ship database migrations with tested down migrations".to_string(),
        "Roll back if crash-free sessions drop below 99%".to_string(),
    ];
    if outcome == Recommendation::ConditionalGo {
        plan.push("Gate new functionality behind feature flags that can be disabled remotely".to_string());
    }
    plan
}

pub fn monitoring_requirements(outcome: Recommendation, inputs: &DecisionInputs) -> Vec<String> {
    let mut reqs = vec![
        "Crash reporting on iOS and Android".to_string(),
        "API error rate and latency dashboards".to_string(),
    ];
    if outcome != Recommendation::Go || inputs.capacity < CapacityRating::MeetsRequirements {
        reqs.push(format!(
            "Concurrent user and database connection alerts at {} users",
            inputs.target_users
        ));
    }
    if inputs.overall_risk >= RiskLevel::Medium {
        reqs.push("Security event logging for authentication and data access".to_string());
    }
    reqs
}

pub fn success_criteria(outcome: Recommendation, inputs: &DecisionInputs) -> Vec<String> {
    match outcome {
        Recommendation::Go | Recommendation::ConditionalGo => vec![
            "Crash-free sessions at or above 99.5% in the first week".to_string(),
            format!(
                "Sustains {} concurrent users without error rate increase",
                inputs.target_users
            ),
            "No new CRITICAL findings in the post-release audit".to_string(),
        ],
        Recommendation::NoGo | Recommendation::MajorRedesignRequired => vec![
            "Zero deployment blockers in the next audit".to_string(),
            "Health score at or above 70".to_string(),
            "Overall risk at MEDIUM or lower".to_string(),
        ],
    }
}
