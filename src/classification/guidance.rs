//! Templated remediation guidance attached to each classified issue.

use super::{Impact, Priority, RemediationEffort};
use crate::core::{Category, Finding};

/// Analyzer recommendations first, then category templates, without repeats.
pub fn remediation_steps(finding: &Finding, priority: Priority, blocker: bool) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();
    let mut push = |step: String| {
        if !step.trim().is_empty() && !steps.contains(&step) {
            steps.push(step);
        }
    };

    for recommendation in &finding.recommendations {
        push(recommendation.clone());
    }
    if blocker {
        push("Resolve before any production deployment".to_string());
    }
    for step in category_steps(finding.category) {
        push(step.to_string());
    }
    if priority >= Priority::High {
        push("Add a regression test that reproduces the finding".to_string());
    }
    push("Re-run the readiness audit to confirm the fix".to_string());

    steps
}

fn category_steps(category: Category) -> [&'static str; 2] {
    match category {
        Category::Native => [
            "Review the native module implementation on iOS and Android",
            "Add native unit tests covering the failing path",
        ],
        Category::Bridge => [
            "Verify bridge method signatures match the JavaScript interface",
            "Exercise the bridge call in an end-to-end flow on both platforms",
        ],
        Category::Database => [
            "Review the affected database functions and access policies",
            "Ship the change as a migration and verify it against a staging copy",
        ],
        Category::Security => [
            "Patch the vulnerable code path and sanitize all untrusted input",
            "Have the fix reviewed by someone outside the original change",
        ],
        Category::Performance => [
            "Profile the hot path under the expected concurrent load",
            "Add caching, batching or indexing where the bottleneck occurs",
        ],
        Category::Config => [
            "Correct the configuration for every target environment",
            "Add a startup check that fails fast on missing or invalid values",
        ],
    }
}

pub fn estimated_fix_time(effort: RemediationEffort) -> &'static str {
    match effort {
        RemediationEffort::Low => "1-2 hours",
        RemediationEffort::Medium => "0.5-1 day",
        RemediationEffort::High => "2-3 days",
        RemediationEffort::Extensive => "1-2 weeks",
    }
}

pub fn dependencies(category: Category) -> Vec<String> {
    let deps: &[&str] = match category {
        Category::Native => &["Native build toolchain (Xcode, Android SDK)"],
        Category::Bridge => &[
            "Native build toolchain (Xcode, Android SDK)",
            "JavaScript bundle rebuild",
        ],
        Category::Database => &["Database migration window", "Staging database snapshot"],
        Category::Security => &["Security review sign-off"],
        Category::Performance => &["Load testing environment"],
        Category::Config => &["Access to environment configuration and secrets"],
    };
    deps.iter().map(|d| d.to_string()).collect()
}

pub fn risk_if_unfixed(priority: Priority, impact: Impact, blocker: bool) -> String {
    let consequence = match impact {
        Impact::DeploymentBlocker => "the release cannot ship safely",
        Impact::PerformanceDegradation => "the app degrades under production load",
        Impact::UserExperience => "users hit broken or confusing flows",
        Impact::CodeQuality => "maintenance cost grows and defects hide in the affected code",
    };
    if blocker {
        return format!("Deployment blocked: {consequence}");
    }
    match priority {
        Priority::Critical => format!("Production incident likely: {consequence}"),
        Priority::High => format!("High chance of production problems: {consequence}"),
        Priority::Medium => format!("Moderate risk: {consequence}"),
        Priority::Low => format!("Low risk: {consequence}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_steps_start_with_analyzer_recommendations() {
        let finding = Finding::new("c1", Severity::Low, Category::Config, "Missing key")
            .with_recommendation("Set SENTRY_DSN in production")
            .with_recommendation("Set SENTRY_DSN in production");
        let steps = remediation_steps(&finding, Priority::Low, false);

        assert_eq!(steps[0], "Set SENTRY_DSN in production");
        assert_eq!(
            steps.iter().filter(|s| s.contains("SENTRY_DSN")).count(),
            1
        );
        assert_eq!(
            steps.last().map(String::as_str),
            Some("Re-run the readiness audit to confirm the fix")
        );
        assert!(!steps.iter().any(|s| s.contains("regression test")));
    }

    #[test]
    fn test_blocker_steps_lead_with_deployment_hold() {
        let finding = Finding::new("s1", Severity::Critical, Category::Security, "x");
        let steps = remediation_steps(&finding, Priority::Critical, true);
        assert_eq!(steps[0], "Resolve before any production deployment");
        assert!(steps.iter().any(|s| s.contains("regression test")));
    }

    #[test]
    fn test_risk_if_unfixed_blocker_wording() {
        let text = risk_if_unfixed(Priority::High, Impact::UserExperience, true);
        assert_eq!(text, "Deployment blocked: users hit broken or confusing flows");
    }
}
