//! Grouped and counted views over classified issues.

use crate::classification::{
    ClassifiedIssue, Impact, ImpactLevel, Priority, RemediationEffort, RiskLevel,
};
use crate::core::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Issue ids grouped along each classification axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCategorization {
    pub total_issues: usize,
    pub by_priority: BTreeMap<Priority, Vec<String>>,
    pub by_impact: BTreeMap<Impact, Vec<String>>,
    pub by_category: BTreeMap<Category, Vec<String>>,
    pub by_effort: BTreeMap<RemediationEffort, Vec<String>>,
    pub deployment_blockers: Vec<String>,
    pub security_vulnerabilities: Vec<String>,
    pub performance_bottlenecks: Vec<String>,
    pub counts: CategorizationCounts,
}

/// Summary counts read by the health scorer and the decision rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationCounts {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub deployment_blockers: usize,
    pub security_vulnerabilities: usize,
    pub performance_bottlenecks: usize,
}

pub fn is_security_vulnerability(issue: &ClassifiedIssue) -> bool {
    issue.finding.category == Category::Security
        || matches!(issue.security_risk, RiskLevel::Critical | RiskLevel::High)
}

pub fn is_performance_bottleneck(issue: &ClassifiedIssue) -> bool {
    issue.performance_impact == ImpactLevel::Severe
        || (issue.finding.category == Category::Performance && issue.priority >= Priority::High)
}

fn group_by<K: Ord>(
    issues: &[ClassifiedIssue],
    key: impl Fn(&ClassifiedIssue) -> K,
) -> BTreeMap<K, Vec<String>> {
    issues.iter().fold(BTreeMap::new(), |mut acc, issue| {
        acc.entry(key(issue))
            .or_insert_with(Vec::new)
            .push(issue.id().to_string());
        acc
    })
}

fn ids_where(issues: &[ClassifiedIssue], pred: impl Fn(&ClassifiedIssue) -> bool) -> Vec<String> {
    issues
        .iter()
        .filter(|issue| pred(issue))
        .map(|issue| issue.id().to_string())
        .collect()
}

fn count_in<K: Ord>(groups: &BTreeMap<K, Vec<String>>, key: &K) -> usize {
    groups.get(key).map_or(0, Vec::len)
}

pub fn categorize_issues(issues: &[ClassifiedIssue]) -> IssueCategorization {
    let by_priority = group_by(issues, |i| i.priority);
    let by_impact = group_by(issues, |i| i.impact);
    let by_category = group_by(issues, |i| i.finding.category);
    let by_effort = group_by(issues, |i| i.remediation_effort);

    let deployment_blockers = ids_where(issues, |i| i.deployment_blocker);
    let security_vulnerabilities = ids_where(issues, is_security_vulnerability);
    let performance_bottlenecks = ids_where(issues, is_performance_bottleneck);

    let counts = CategorizationCounts {
        total: issues.len(),
        critical: count_in(&by_priority, &Priority::Critical),
        high: count_in(&by_priority, &Priority::High),
        medium: count_in(&by_priority, &Priority::Medium),
        low: count_in(&by_priority, &Priority::Low),
        deployment_blockers: deployment_blockers.len(),
        security_vulnerabilities: security_vulnerabilities.len(),
        performance_bottlenecks: performance_bottlenecks.len(),
    };

    tracing::debug!(
        total = counts.total,
        critical = counts.critical,
        high = counts.high,
        blockers = counts.deployment_blockers,
        "Categorized issues"
    );

    IssueCategorization {
        total_issues: issues.len(),
        by_priority,
        by_impact,
        by_category,
        by_effort,
        deployment_blockers,
        security_vulnerabilities,
        performance_bottlenecks,
        counts,
    }
}
