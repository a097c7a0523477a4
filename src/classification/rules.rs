//! Ordered rule tables for each classification axis.
//!
//! Each axis is a slice of [`AxisRule`]s evaluated top down; the first rule
//! whose predicate holds decides the axis value, and the axis default applies
//! when none does. Precedence lives in the order of the tables below.

use super::terms::*;
use super::{Frequency, Impact, ImpactLevel, Priority, RemediationEffort, RiskLevel};
use crate::core::{Category, Finding, Severity};

/// A finding prepared for rule evaluation.
#[derive(Debug, Clone)]
pub struct FindingView<'a> {
    pub finding: &'a Finding,
    /// Lowercased `message` + `details`
    pub content: String,
}

impl<'a> FindingView<'a> {
    pub fn new(finding: &'a Finding) -> Self {
        Self {
            content: finding.content(),
            finding,
        }
    }

    fn severity(&self) -> Severity {
        self.finding.severity
    }

    fn category(&self) -> Category {
        self.finding.category
    }

    fn mentions(&self, terms: &[&str]) -> bool {
        mentions_any(&self.content, terms)
    }
}

pub type Predicate = fn(&FindingView<'_>) -> bool;

/// One `{predicate, outcome}` entry of an axis table.
#[derive(Clone, Copy)]
pub struct AxisRule<T: 'static> {
    pub name: &'static str,
    pub matches: Predicate,
    pub outcome: T,
}

impl<T: std::fmt::Debug> std::fmt::Debug for AxisRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisRule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

/// First rule in `rules` that matches `view`.
pub fn matching_rule<'r, T>(
    rules: &'r [AxisRule<T>],
    view: &FindingView<'_>,
) -> Option<&'r AxisRule<T>> {
    rules.iter().find(|rule| (rule.matches)(view))
}

/// Evaluate an axis table, falling back to `default`.
pub fn first_match<T: Copy>(rules: &[AxisRule<T>], view: &FindingView<'_>, default: T) -> T {
    matching_rule(rules, view)
        .map(|rule| rule.outcome)
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Shared predicates

fn has_critical_terms(v: &FindingView<'_>) -> bool {
    v.mentions(CRITICAL_TERMS)
}

fn is_critical_severity(v: &FindingView<'_>) -> bool {
    v.severity() == Severity::Critical
}

fn is_high_severity(v: &FindingView<'_>) -> bool {
    v.severity() == Severity::High
}

fn is_medium_severity(v: &FindingView<'_>) -> bool {
    v.severity() == Severity::Medium
}

// ---------------------------------------------------------------------------
// Priority

fn has_high_terms(v: &FindingView<'_>) -> bool {
    v.mentions(HIGH_TERMS)
}

fn has_medium_terms(v: &FindingView<'_>) -> bool {
    v.mentions(MEDIUM_TERMS)
}

pub const PRIORITY_RULES: &[AxisRule<Priority>] = &[
    AxisRule {
        name: "critical_severity",
        matches: is_critical_severity,
        outcome: Priority::Critical,
    },
    AxisRule {
        name: "critical_terms",
        matches: has_critical_terms,
        outcome: Priority::Critical,
    },
    AxisRule {
        name: "high_severity",
        matches: is_high_severity,
        outcome: Priority::High,
    },
    AxisRule {
        name: "high_terms",
        matches: has_high_terms,
        outcome: Priority::High,
    },
    AxisRule {
        name: "medium_severity",
        matches: is_medium_severity,
        outcome: Priority::Medium,
    },
    AxisRule {
        name: "medium_terms",
        matches: has_medium_terms,
        outcome: Priority::Medium,
    },
];

pub const DEFAULT_PRIORITY: Priority = Priority::Low;

// ---------------------------------------------------------------------------
// Impact

fn mentions_blocking(v: &FindingView<'_>) -> bool {
    v.mentions(BLOCKER_IMPACT_TERMS)
}

fn mentions_performance(v: &FindingView<'_>) -> bool {
    v.mentions(PERFORMANCE_IMPACT_TERMS)
}

fn mentions_users(v: &FindingView<'_>) -> bool {
    v.mentions(USER_IMPACT_TERMS)
}

pub const IMPACT_RULES: &[AxisRule<Impact>] = &[
    AxisRule {
        name: "blocker_terms",
        matches: mentions_blocking,
        outcome: Impact::DeploymentBlocker,
    },
    AxisRule {
        name: "critical_severity",
        matches: is_critical_severity,
        outcome: Impact::DeploymentBlocker,
    },
    AxisRule {
        name: "performance_terms",
        matches: mentions_performance,
        outcome: Impact::PerformanceDegradation,
    },
    AxisRule {
        name: "user_terms",
        matches: mentions_users,
        outcome: Impact::UserExperience,
    },
];

pub const DEFAULT_IMPACT: Impact = Impact::CodeQuality;

// ---------------------------------------------------------------------------
// Remediation effort

fn needs_redesign(v: &FindingView<'_>) -> bool {
    v.mentions(EXTENSIVE_EFFORT_TERMS)
}

fn is_critical_security(v: &FindingView<'_>) -> bool {
    v.category() == Category::Security && v.severity() == Severity::Critical
}

fn is_schema_change(v: &FindingView<'_>) -> bool {
    v.category() == Category::Database && v.content.contains("schema")
}

fn needs_specialist(v: &FindingView<'_>) -> bool {
    v.mentions(SPECIALIST_EFFORT_TERMS)
}

fn is_config_or_bridge(v: &FindingView<'_>) -> bool {
    matches!(v.category(), Category::Config | Category::Bridge)
}

fn mentions_integration(v: &FindingView<'_>) -> bool {
    v.mentions(MODERATE_EFFORT_TERMS)
}

pub const EFFORT_RULES: &[AxisRule<RemediationEffort>] = &[
    AxisRule {
        name: "redesign_terms",
        matches: needs_redesign,
        outcome: RemediationEffort::Extensive,
    },
    AxisRule {
        name: "critical_security",
        matches: is_critical_security,
        outcome: RemediationEffort::High,
    },
    AxisRule {
        name: "database_schema",
        matches: is_schema_change,
        outcome: RemediationEffort::High,
    },
    AxisRule {
        name: "native_or_policy_terms",
        matches: needs_specialist,
        outcome: RemediationEffort::High,
    },
    AxisRule {
        name: "config_or_bridge_category",
        matches: is_config_or_bridge,
        outcome: RemediationEffort::Medium,
    },
    AxisRule {
        name: "configuration_or_integration_terms",
        matches: mentions_integration,
        outcome: RemediationEffort::Medium,
    },
];

pub const DEFAULT_EFFORT: RemediationEffort = RemediationEffort::Low;

// ---------------------------------------------------------------------------
// Deployment blocker

fn says_blocker(v: &FindingView<'_>) -> bool {
    v.mentions(EXPLICIT_BLOCKER_TERMS)
}

fn is_high_security(v: &FindingView<'_>) -> bool {
    v.category() == Category::Security && v.severity() == Severity::High
}

pub const BLOCKER_RULES: &[AxisRule<bool>] = &[
    AxisRule {
        name: "critical_severity",
        matches: is_critical_severity,
        outcome: true,
    },
    AxisRule {
        name: "critical_terms",
        matches: has_critical_terms,
        outcome: true,
    },
    AxisRule {
        name: "explicit_blocker",
        matches: says_blocker,
        outcome: true,
    },
    AxisRule {
        name: "high_security",
        matches: is_high_security,
        outcome: true,
    },
];

// ---------------------------------------------------------------------------
// Risk dimensions

fn security_critical(v: &FindingView<'_>) -> bool {
    v.mentions(SECURITY_CRITICAL_TERMS)
}
fn security_high(v: &FindingView<'_>) -> bool {
    v.mentions(SECURITY_HIGH_TERMS)
}
fn security_medium(v: &FindingView<'_>) -> bool {
    v.mentions(SECURITY_MEDIUM_TERMS)
}

pub const SECURITY_RISK_RULES: &[AxisRule<RiskLevel>] = &[
    AxisRule {
        name: "exploit_terms",
        matches: security_critical,
        outcome: RiskLevel::Critical,
    },
    AxisRule {
        name: "exposure_terms",
        matches: security_high,
        outcome: RiskLevel::High,
    },
    AxisRule {
        name: "hardening_terms",
        matches: security_medium,
        outcome: RiskLevel::Medium,
    },
];

fn reliability_critical(v: &FindingView<'_>) -> bool {
    v.mentions(RELIABILITY_CRITICAL_TERMS)
}
fn reliability_high(v: &FindingView<'_>) -> bool {
    v.mentions(RELIABILITY_HIGH_TERMS)
}
fn reliability_medium(v: &FindingView<'_>) -> bool {
    v.mentions(RELIABILITY_MEDIUM_TERMS)
}

pub const RELIABILITY_RULES: &[AxisRule<RiskLevel>] = &[
    AxisRule {
        name: "failure_terms",
        matches: reliability_critical,
        outcome: RiskLevel::Critical,
    },
    AxisRule {
        name: "instability_terms",
        matches: reliability_high,
        outcome: RiskLevel::High,
    },
    AxisRule {
        name: "resilience_terms",
        matches: reliability_medium,
        outcome: RiskLevel::Medium,
    },
];

fn performance_severe(v: &FindingView<'_>) -> bool {
    v.mentions(PERFORMANCE_SEVERE_TERMS)
}
fn performance_moderate(v: &FindingView<'_>) -> bool {
    v.mentions(PERFORMANCE_MODERATE_TERMS)
}
fn performance_minor(v: &FindingView<'_>) -> bool {
    v.mentions(PERFORMANCE_MINOR_TERMS)
}

pub const PERFORMANCE_IMPACT_RULES: &[AxisRule<ImpactLevel>] = &[
    AxisRule {
        name: "saturation_terms",
        matches: performance_severe,
        outcome: ImpactLevel::Severe,
    },
    AxisRule {
        name: "slowness_terms",
        matches: performance_moderate,
        outcome: ImpactLevel::Moderate,
    },
    AxisRule {
        name: "tuning_terms",
        matches: performance_minor,
        outcome: ImpactLevel::Minor,
    },
];

fn ux_severe(v: &FindingView<'_>) -> bool {
    v.mentions(UX_SEVERE_TERMS)
}
fn ux_moderate(v: &FindingView<'_>) -> bool {
    v.mentions(UX_MODERATE_TERMS)
}
fn ux_minor(v: &FindingView<'_>) -> bool {
    v.mentions(UX_MINOR_TERMS)
}

pub const USER_EXPERIENCE_RULES: &[AxisRule<ImpactLevel>] = &[
    AxisRule {
        name: "broken_flow_terms",
        matches: ux_severe,
        outcome: ImpactLevel::Severe,
    },
    AxisRule {
        name: "degraded_flow_terms",
        matches: ux_moderate,
        outcome: ImpactLevel::Moderate,
    },
    AxisRule {
        name: "presentation_terms",
        matches: ux_minor,
        outcome: ImpactLevel::Minor,
    },
];

// ---------------------------------------------------------------------------
// Frequency

fn says_always(v: &FindingView<'_>) -> bool {
    ALWAYS_PATTERN.is_match(&v.content)
}
fn says_frequent(v: &FindingView<'_>) -> bool {
    FREQUENT_PATTERN.is_match(&v.content)
}
fn says_occasional(v: &FindingView<'_>) -> bool {
    OCCASIONAL_PATTERN.is_match(&v.content)
}

pub const FREQUENCY_RULES: &[AxisRule<Frequency>] = &[
    AxisRule {
        name: "always_terms",
        matches: says_always,
        outcome: Frequency::Always,
    },
    AxisRule {
        name: "critical_severity",
        matches: is_critical_severity,
        outcome: Frequency::Always,
    },
    AxisRule {
        name: "frequent_terms",
        matches: says_frequent,
        outcome: Frequency::Frequent,
    },
    AxisRule {
        name: "high_severity",
        matches: is_high_severity,
        outcome: Frequency::Frequent,
    },
    AxisRule {
        name: "occasional_terms",
        matches: says_occasional,
        outcome: Frequency::Occasional,
    },
    AxisRule {
        name: "medium_severity",
        matches: is_medium_severity,
        outcome: Frequency::Occasional,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity, category: Category, message: &str) -> Finding {
        Finding::new("t", severity, category, message)
    }

    #[test]
    fn test_priority_rule_order_prefers_severity() {
        let f = finding(Severity::Critical, Category::Config, "typo in label");
        let view = FindingView::new(&f);
        let rule = matching_rule(PRIORITY_RULES, &view).unwrap();
        assert_eq!(rule.name, "critical_severity");
    }

    #[test]
    fn test_priority_critical_terms_override_low_severity() {
        let f = finding(Severity::Low, Category::Native, "App crash on resume");
        let view = FindingView::new(&f);
        assert_eq!(
            first_match(PRIORITY_RULES, &view, DEFAULT_PRIORITY),
            Priority::Critical
        );
    }

    #[test]
    fn test_priority_high_terms() {
        let f = finding(Severity::Info, Category::Database, "Race condition in sync");
        let view = FindingView::new(&f);
        assert_eq!(
            first_match(PRIORITY_RULES, &view, DEFAULT_PRIORITY),
            Priority::High
        );
    }

    #[test]
    fn test_priority_defaults_to_low() {
        let f = finding(Severity::Info, Category::Native, "Unused import");
        let view = FindingView::new(&f);
        assert!(matching_rule(PRIORITY_RULES, &view).is_none());
        assert_eq!(
            first_match(PRIORITY_RULES, &view, DEFAULT_PRIORITY),
            Priority::Low
        );
    }

    #[test]
    fn test_impact_performance_before_user() {
        let f = finding(
            Severity::Low,
            Category::Performance,
            "User list timeout on slow networks",
        );
        let view = FindingView::new(&f);
        assert_eq!(
            first_match(IMPACT_RULES, &view, DEFAULT_IMPACT),
            Impact::PerformanceDegradation
        );
    }

    #[test]
    fn test_effort_schema_only_for_database() {
        let db = finding(Severity::Low, Category::Database, "Schema drift detected");
        let native = finding(Severity::Low, Category::Native, "Schema drift detected");
        assert_eq!(
            first_match(EFFORT_RULES, &FindingView::new(&db), DEFAULT_EFFORT),
            RemediationEffort::High
        );
        assert_eq!(
            first_match(EFFORT_RULES, &FindingView::new(&native), DEFAULT_EFFORT),
            RemediationEffort::Low
        );
    }

    #[test]
    fn test_effort_redesign_wins_over_category() {
        let f = finding(
            Severity::Low,
            Category::Config,
            "Needs architecture rework of env loading",
        );
        assert_eq!(
            first_match(EFFORT_RULES, &FindingView::new(&f), DEFAULT_EFFORT),
            RemediationEffort::Extensive
        );
    }

    #[test]
    fn test_blocker_for_high_security_only() {
        let sec = finding(Severity::High, Category::Security, "Token stored in logs");
        let perf = finding(Severity::High, Category::Performance, "Token stored in logs");
        assert!(first_match(BLOCKER_RULES, &FindingView::new(&sec), false));
        assert!(!first_match(BLOCKER_RULES, &FindingView::new(&perf), false));
    }

    #[test]
    fn test_explicit_blocker_wording() {
        let f = finding(
            Severity::Low,
            Category::Config,
            "Missing APNs key is a production blocker",
        );
        let view = FindingView::new(&f);
        assert_eq!(
            matching_rule(BLOCKER_RULES, &view).map(|r| r.name),
            Some("explicit_blocker")
        );
    }

    #[test]
    fn test_frequency_terms_before_severity() {
        let f = finding(Severity::Critical, Category::Bridge, "Fails occasionally");
        // The ALWAYS severity rule sits above the occasional wording.
        assert_eq!(
            first_match(FREQUENCY_RULES, &FindingView::new(&f), Frequency::Rare),
            Frequency::Always
        );

        let f = finding(Severity::Low, Category::Bridge, "Fails sometimes");
        assert_eq!(
            first_match(FREQUENCY_RULES, &FindingView::new(&f), Frequency::Rare),
            Frequency::Occasional
        );
    }

    #[test]
    fn test_frequent_from_wording_and_high_severity() {
        let f = finding(Severity::Low, Category::Database, "Sync often drops rows");
        let view = FindingView::new(&f);
        assert_eq!(matching_rule(FREQUENCY_RULES, &view).unwrap().name, "frequent_terms");
        assert_eq!(first_match(FREQUENCY_RULES, &view, Frequency::Rare), Frequency::Frequent);

        let f = finding(Severity::High, Category::Native, "Unused camera permission");
        let view = FindingView::new(&f);
        assert_eq!(matching_rule(FREQUENCY_RULES, &view).unwrap().name, "high_severity");
        assert_eq!(first_match(FREQUENCY_RULES, &view, Frequency::Rare), Frequency::Frequent);
    }
}
