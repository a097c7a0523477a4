//! Finding normalization: flatten phase outputs into one ordered,
//! deduplicated list.

use crate::core::{AuditInput, Finding, PhaseFailure, PhaseOutcome, Severity, Status};
use std::collections::HashSet;

/// Synthetic finding standing in for a phase whose analyzer raised an error.
pub fn phase_failure_finding(failure: &PhaseFailure) -> Finding {
    let phase = failure.phase_name;
    Finding {
        id: format!("phase-failure-{}", phase.slug()),
        name: format!("{} failed", phase.display_name()),
        status: Status::Fail,
        severity: Severity::Critical,
        category: phase.failure_category(),
        message: format!("{} phase failed: {}", phase.display_name(), failure.error),
        details: None,
        evidence: Vec::new(),
        recommendations: vec![format!(
            "Fix the {} analyzer and re-run the audit",
            phase.display_name().to_lowercase()
        )],
        timestamp: String::new(),
    }
}

/// Concatenate findings from every phase (results, then critical issues),
/// followed by the top-level critical issues. Failed phases contribute one
/// synthetic CRITICAL finding each.
pub fn collect_findings(input: &AuditInput) -> Vec<Finding> {
    let mut findings = Vec::new();

    for outcome in &input.phases {
        match outcome {
            PhaseOutcome::Completed(result) => {
                findings.extend(result.results.iter().cloned());
                findings.extend(result.critical_issues.iter().cloned());
            }
            PhaseOutcome::Failed(failure) => {
                tracing::warn!(
                    phase = %failure.phase_name,
                    error = %failure.error,
                    "Analysis phase failed; recording as critical finding"
                );
                findings.push(phase_failure_finding(failure));
            }
        }
    }
    findings.extend(input.critical_issues.iter().cloned());

    findings
}

/// Drop later findings whose `id` was already seen. First occurrence wins and
/// relative order is preserved.
pub fn normalize_findings(findings: Vec<Finding>) -> Vec<Finding> {
    let mut seen = HashSet::with_capacity(findings.len());
    let before = findings.len();

    let unique: Vec<Finding> = findings
        .into_iter()
        .filter(|finding| seen.insert(finding.id.clone()))
        .collect();

    if unique.len() < before {
        tracing::debug!(
            duplicates = before - unique.len(),
            "Discarded duplicate findings"
        );
    }
    unique
}

/// [`collect_findings`] followed by [`normalize_findings`].
pub fn normalize_input(input: &AuditInput) -> Vec<Finding> {
    normalize_findings(collect_findings(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, PhaseKind, PhaseResult};

    fn finding(id: &str, message: &str) -> Finding {
        Finding::new(id, Severity::Low, Category::Config, message)
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize_input(&AuditInput::default()).is_empty());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let findings = vec![
            finding("a", "first a"),
            finding("b", "first b"),
            finding("a", "second a"),
            finding("c", "first c"),
            finding("b", "second b"),
        ];
        let unique = normalize_findings(findings);

        let summary: Vec<_> = unique.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(summary, vec!["first a", "first b", "first c"]);
    }

    #[test]
    fn test_collect_order_phase_results_then_top_level() {
        let mut static_phase = PhaseResult::passing(PhaseKind::StaticAnalysis);
        static_phase.results.push(finding("s1", "static result"));
        static_phase.critical_issues.push(finding("s2", "static critical"));

        let mut db_phase = PhaseResult::new(PhaseKind::DatabaseSimulation, Status::Fail);
        db_phase.results.push(finding("d1", "db result"));

        let input = AuditInput {
            phases: vec![static_phase.into(), db_phase.into()],
            critical_issues: vec![finding("top", "top level"), finding("s1", "dupe")],
        };

        let ids: Vec<_> = normalize_input(&input)
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "d1", "top"]);
    }

    #[test]
    fn test_failed_phase_becomes_critical_finding() {
        let input = AuditInput {
            phases: vec![
                PhaseFailure {
                    phase_name: PhaseKind::SecurityAudit,
                    error: "timeout talking to scanner".to_string(),
                }
                .into(),
                PhaseResult::passing(PhaseKind::ConfigurationAudit).into(),
            ],
            critical_issues: vec![],
        };

        let findings = normalize_input(&input);
        assert_eq!(findings.len(), 1);
        let synthetic = &findings[0];
        assert_eq!(synthetic.id, "phase-failure-security-audit");
        assert_eq!(synthetic.severity, Severity::Critical);
        assert_eq!(synthetic.category, Category::Security);
        assert_eq!(
            synthetic.message,
            "Security audit phase failed: timeout talking to scanner"
        );
    }
}
