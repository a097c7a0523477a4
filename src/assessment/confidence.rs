//! How much the verdict can be trusted given what the audit actually covered.

use crate::config::ConfidenceConfig;
use crate::core::{AuditInput, Finding};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "LOW",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceLevelAssessment {
    /// Percentage of expected phases that completed
    pub completeness: f64,
    pub test_coverage: f64,
    pub evidence_quality: ConfidenceLevel,
    pub evidence_score: f64,
    pub overall_score: f64,
    pub level: ConfidenceLevel,
}

/// Percentage of findings carrying evidence, bucketed.
///
/// No findings at all counts as complete evidence.
pub fn evidence_quality(findings: &[Finding]) -> (ConfidenceLevel, f64) {
    let ratio = if findings.is_empty() {
        1.0
    } else {
        findings.iter().filter(|f| f.has_evidence()).count() as f64 / findings.len() as f64
    };

    if ratio >= 0.8 {
        (ConfidenceLevel::High, 90.0)
    } else if ratio >= 0.5 {
        (ConfidenceLevel::Medium, 70.0)
    } else {
        (ConfidenceLevel::Low, 50.0)
    }
}

pub fn completeness(executed_phases: usize, total_phases: usize) -> f64 {
    if total_phases == 0 {
        return 100.0;
    }
    (executed_phases as f64 / total_phases as f64 * 100.0).min(100.0)
}

fn level_for(score: f64) -> ConfidenceLevel {
    if score >= 80.0 {
        ConfidenceLevel::High
    } else if score >= 60.0 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// `findings` are the normalized (deduplicated) findings of the run.
pub fn assess_confidence(
    input: &AuditInput,
    findings: &[Finding],
    config: &ConfidenceConfig,
) -> ConfidenceLevelAssessment {
    let completeness = completeness(input.completed_phases().count(), config.total_phases);
    let test_coverage = config.test_coverage.clamp(0.0, 100.0);
    let (evidence_quality, evidence_score) = evidence_quality(findings);

    let overall_score = (completeness + test_coverage + evidence_score) / 3.0;

    ConfidenceLevelAssessment {
        completeness,
        test_coverage,
        evidence_quality,
        evidence_score,
        overall_score,
        level: level_for(overall_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, PhaseFailure, PhaseKind, PhaseResult, Severity};

    fn all_phases_passing() -> AuditInput {
        AuditInput {
            phases: PhaseKind::ALL
                .iter()
                .map(|kind| PhaseResult::passing(*kind).into())
                .collect(),
            critical_issues: vec![],
        }
    }

    #[test]
    fn test_clean_run_is_high_confidence() {
        let assessment =
            assess_confidence(&all_phases_passing(), &[], &ConfidenceConfig::default());
        assert_eq!(assessment.completeness, 100.0);
        assert_eq!(assessment.evidence_quality, ConfidenceLevel::High);
        assert!((assessment.overall_score - (100.0 + 75.0 + 90.0) / 3.0).abs() < 1e-9);
        assert_eq!(assessment.level, ConfidenceLevel::High);
    }

    #[test]
    fn test_failed_phases_reduce_completeness() {
        let mut input = all_phases_passing();
        input.phases[2] = PhaseFailure {
            phase_name: PhaseKind::SecurityAudit,
            error: "boom".to_string(),
        }
        .into();
        let assessment = assess_confidence(&input, &[], &ConfidenceConfig::default());
        assert_eq!(assessment.completeness, 80.0);
    }

    #[test]
    fn test_completeness_is_capped() {
        assert_eq!(completeness(7, 5), 100.0);
        assert_eq!(completeness(0, 5), 0.0);
    }

    #[test]
    fn test_evidence_buckets() {
        let bare = Finding::new("a", Severity::Low, Category::Config, "x");
        let backed = bare.clone().with_evidence("config/app.json:12");
        let blank = bare.clone().with_evidence("   ");

        assert_eq!(evidence_quality(&[backed.clone()]).0, ConfidenceLevel::High);
        assert_eq!(
            evidence_quality(&[backed.clone(), bare.clone()]),
            (ConfidenceLevel::Medium, 70.0)
        );
        assert_eq!(evidence_quality(&[blank, bare]), (ConfidenceLevel::Low, 50.0));
    }

    #[test]
    fn test_no_phases_is_low_confidence() {
        let findings = vec![Finding::new("a", Severity::Low, Category::Config, "x")];
        let assessment =
            assess_confidence(&AuditInput::default(), &findings, &ConfidenceConfig::default());
        // (0 + 75 + 50) / 3
        assert_eq!(assessment.level, ConfidenceLevel::Low);
    }
}
