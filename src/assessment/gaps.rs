//! Critical gap analysis: what must be fixed before release, what should be,
//! and what can wait.

use crate::classification::{ClassifiedIssue, Priority};
use crate::core::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Short view of one issue for gap listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub id: String,
    pub message: String,
    pub category: Category,
    pub priority: Priority,
    pub estimated_fix_time: String,
}

impl From<&ClassifiedIssue> for IssueSummary {
    fn from(issue: &ClassifiedIssue) -> Self {
        Self {
            id: issue.finding.id.clone(),
            message: issue.finding.message.clone(),
            category: issue.finding.category,
            priority: issue.priority,
            estimated_fix_time: issue.estimated_fix_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalGapAnalysis {
    /// Deployment blockers
    pub must_fix: Vec<IssueSummary>,
    /// Non-blocking CRITICAL or HIGH priority issues
    pub should_fix: Vec<IssueSummary>,
    pub can_defer: Vec<IssueSummary>,
    /// Blockers and should-fix issues per category
    pub gaps_by_category: BTreeMap<Category, usize>,
    /// Weighted fix estimate in days for every CRITICAL, HIGH and MEDIUM issue
    pub total_fix_days: f64,
}

/// Days of work per priority used for release planning.
pub fn fix_days(priority: Priority) -> f64 {
    match priority {
        Priority::Critical => 2.0,
        Priority::High => 1.0,
        Priority::Medium => 0.5,
        Priority::Low => 0.0,
    }
}

/// Render a day estimate: `<1 day`, `1 day`, `N days` below two weeks,
/// `N weeks` from there on. Partial days and weeks round up.
pub fn format_fix_time(days: f64) -> String {
    if days < 1.0 {
        "<1 day".to_string()
    } else if days < 14.0 {
        match days.ceil() as u64 {
            1 => "1 day".to_string(),
            n => format!("{n} days"),
        }
    } else {
        format!("{} weeks", (days / 7.0).ceil() as u64)
    }
}

pub fn analyze_gaps(issues: &[ClassifiedIssue]) -> CriticalGapAnalysis {
    let mut analysis = CriticalGapAnalysis::default();

    for issue in issues {
        let summary = IssueSummary::from(issue);
        if issue.deployment_blocker {
            *analysis.gaps_by_category.entry(summary.category).or_insert(0) += 1;
            analysis.must_fix.push(summary);
        } else if issue.priority >= Priority::High {
            *analysis.gaps_by_category.entry(summary.category).or_insert(0) += 1;
            analysis.should_fix.push(summary);
        } else {
            analysis.can_defer.push(summary);
        }
        analysis.total_fix_days += fix_days(issue.priority);
    }

    analysis
}
