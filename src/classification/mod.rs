//! Multi-axis issue classification.
//!
//! [`classify_issue`] is a pure function of one [`Finding`]: it never looks at
//! other findings and never fails. Content that matches no rule on an axis
//! falls through to that axis's default (LOW priority, CODE_QUALITY impact,
//! LOW effort, NONE/LOW risk, RARE frequency).

pub mod guidance;
pub mod rules;
pub mod terms;

use crate::config::ParallelConfig;
use crate::core::Finding;
use crate::observability::{increment_processed, set_current_finding, set_progress};
use rayon::prelude::*;
use rules::{
    first_match, FindingView, BLOCKER_RULES, DEFAULT_EFFORT, DEFAULT_IMPACT, DEFAULT_PRIORITY,
    EFFORT_RULES, FREQUENCY_RULES, IMPACT_RULES, PERFORMANCE_IMPACT_RULES, PRIORITY_RULES,
    RELIABILITY_RULES, SECURITY_RISK_RULES, USER_EXPERIENCE_RULES,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    DeploymentBlocker,
    PerformanceDegradation,
    UserExperience,
    CodeQuality,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::DeploymentBlocker => "DEPLOYMENT_BLOCKER",
            Impact::PerformanceDegradation => "PERFORMANCE_DEGRADATION",
            Impact::UserExperience => "USER_EXPERIENCE",
            Impact::CodeQuality => "CODE_QUALITY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemediationEffort {
    Low,
    Medium,
    High,
    Extensive,
}

/// Four-step rating for the reliability and security dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-step rating for the user-experience and performance dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    None,
    Minor,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Rare,
    Occasional,
    Frequent,
    Always,
}

/// A finding enriched with one value per classification axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedIssue {
    #[serde(flatten)]
    pub finding: Finding,
    pub priority: Priority,
    pub impact: Impact,
    pub remediation_effort: RemediationEffort,
    pub deployment_blocker: bool,
    pub user_experience_impact: ImpactLevel,
    pub system_reliability_impact: RiskLevel,
    pub security_risk: RiskLevel,
    pub performance_impact: ImpactLevel,
    pub frequency_of_occurrence: Frequency,
    pub remediation_steps: Vec<String>,
    pub estimated_fix_time: String,
    pub dependencies: Vec<String>,
    pub risk_if_unfixed: String,
}

impl ClassifiedIssue {
    pub fn id(&self) -> &str {
        &self.finding.id
    }
}

/// Classify a single finding along every axis.
pub fn classify_issue(finding: &Finding) -> ClassifiedIssue {
    let view = FindingView::new(finding);

    let priority = first_match(PRIORITY_RULES, &view, DEFAULT_PRIORITY);
    let impact = first_match(IMPACT_RULES, &view, DEFAULT_IMPACT);
    let remediation_effort = first_match(EFFORT_RULES, &view, DEFAULT_EFFORT);
    let deployment_blocker = first_match(BLOCKER_RULES, &view, false);

    ClassifiedIssue {
        priority,
        impact,
        remediation_effort,
        deployment_blocker,
        user_experience_impact: first_match(USER_EXPERIENCE_RULES, &view, ImpactLevel::None),
        system_reliability_impact: first_match(RELIABILITY_RULES, &view, RiskLevel::Low),
        security_risk: first_match(SECURITY_RISK_RULES, &view, RiskLevel::Low),
        performance_impact: first_match(PERFORMANCE_IMPACT_RULES, &view, ImpactLevel::None),
        frequency_of_occurrence: first_match(FREQUENCY_RULES, &view, Frequency::Rare),
        remediation_steps: guidance::remediation_steps(finding, priority, deployment_blocker),
        estimated_fix_time: guidance::estimated_fix_time(remediation_effort).to_string(),
        dependencies: guidance::dependencies(finding.category),
        risk_if_unfixed: guidance::risk_if_unfixed(priority, impact, deployment_blocker),
        finding: finding.clone(),
    }
}

fn classify_tracked(finding: &Finding) -> ClassifiedIssue {
    let _finding = set_current_finding(finding.id.as_str());
    let issue = classify_issue(finding);
    increment_processed();
    issue
}

/// Classify every finding, in parallel when configured. Output order always
/// matches input order.
pub fn classify_issues(findings: &[Finding], parallel: &ParallelConfig) -> Vec<ClassifiedIssue> {
    set_progress(0, findings.len());

    if parallel.should_parallelize(findings.len()) {
        tracing::debug!(findings = findings.len(), "Classifying in parallel");
        findings.par_iter().map(classify_tracked).collect()
    } else {
        findings.iter().map(classify_tracked).collect()
    }
}
