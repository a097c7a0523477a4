//! Four-dimension risk assessment.

use crate::classification::{ClassifiedIssue, ImpactLevel, RiskLevel};
use crate::config::{DimensionThresholds, RiskThresholds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub security: RiskLevel,
    pub performance: RiskLevel,
    pub reliability: RiskLevel,
    pub user_experience: RiskLevel,
    pub overall: RiskLevel,
    pub mitigations: Vec<String>,
}

/// Rate one dimension from its top-level and second-level issue counts.
pub fn rate_dimension(top: usize, second: usize, thresholds: &DimensionThresholds) -> RiskLevel {
    let reaches = |count: usize, threshold: usize| threshold > 0 && count >= threshold;

    if reaches(top, thresholds.critical_top) {
        RiskLevel::Critical
    } else if reaches(top, thresholds.high_top) || second > thresholds.high_second_above {
        RiskLevel::High
    } else if reaches(second, thresholds.medium_second) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Any CRITICAL dimension wins; two or more MEDIUM dimensions compound to HIGH.
pub fn combine_overall(dimensions: &[RiskLevel]) -> RiskLevel {
    let count = |level: RiskLevel| dimensions.iter().filter(|d| **d == level).count();

    if count(RiskLevel::Critical) > 0 {
        RiskLevel::Critical
    } else if count(RiskLevel::High) > 0 || count(RiskLevel::Medium) >= 2 {
        RiskLevel::High
    } else if count(RiskLevel::Medium) > 0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn count_where(issues: &[ClassifiedIssue], pred: impl Fn(&ClassifiedIssue) -> bool) -> usize {
    issues.iter().filter(|issue| pred(issue)).count()
}

fn mitigations(assessment: &RiskAssessment) -> Vec<String> {
    let mut out = Vec::new();
    let elevated = |level: RiskLevel| level >= RiskLevel::Medium;

    if elevated(assessment.security) {
        out.push("Complete a focused security review of the flagged code paths".to_string());
        if assessment.security >= RiskLevel::High {
            out.push("Run penetration testing against the release candidate".to_string());
        }
    }
    if elevated(assessment.performance) {
        out.push("Load test at the target concurrent user count before release".to_string());
        if assessment.performance >= RiskLevel::High {
            out.push("Scale database connections and add caching on hot paths".to_string());
        }
    }
    if elevated(assessment.reliability) {
        out.push("Add error boundaries and crash reporting on affected screens".to_string());
        if assessment.reliability >= RiskLevel::High {
            out.push("Stage the rollout behind a feature flag with a kill switch".to_string());
        }
    }
    if elevated(assessment.user_experience) {
        out.push("Run a usability pass over the degraded user flows".to_string());
    }
    if out.is_empty() {
        out.push("Maintain standard release monitoring".to_string());
    }
    out
}

pub fn assess_risk(issues: &[ClassifiedIssue], thresholds: &RiskThresholds) -> RiskAssessment {
    let security = rate_dimension(
        count_where(issues, |i| i.security_risk == RiskLevel::Critical),
        count_where(issues, |i| i.security_risk == RiskLevel::High),
        &thresholds.security,
    );
    let reliability = rate_dimension(
        count_where(issues, |i| i.system_reliability_impact == RiskLevel::Critical),
        count_where(issues, |i| i.system_reliability_impact == RiskLevel::High),
        &thresholds.reliability,
    );
    let performance = rate_dimension(
        count_where(issues, |i| i.performance_impact == ImpactLevel::Severe),
        count_where(issues, |i| i.performance_impact == ImpactLevel::Moderate),
        &thresholds.performance,
    );
    let user_experience = rate_dimension(
        count_where(issues, |i| i.user_experience_impact == ImpactLevel::Severe),
        count_where(issues, |i| i.user_experience_impact == ImpactLevel::Moderate),
        &thresholds.user_experience,
    );

    let overall = combine_overall(&[security, performance, reliability, user_experience]);

    let mut assessment = RiskAssessment {
        security,
        performance,
        reliability,
        user_experience,
        overall,
        mitigations: Vec::new(),
    };
    assessment.mitigations = mitigations(&assessment);

    tracing::debug!(
        security = %security,
        performance = %performance,
        reliability = %reliability,
        user_experience = %user_experience,
        overall = %overall,
        "Assessed risk"
    );

    assessment
}
