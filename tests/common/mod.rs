// Shared builders for shipgate integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use shipgate::{
    AuditInput, Category, EvaluationOptions, Finding, PhaseKind, PhaseOutcome, PhaseResult,
    Severity, ShipgateConfig, Status,
};
use std::path::PathBuf;

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

pub fn default_options() -> EvaluationOptions {
    EvaluationOptions::new(ShipgateConfig::default(), reference_date())
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Every phase completed and passing, with no findings.
pub fn clean_phases() -> Vec<PhaseResult> {
    PhaseKind::ALL
        .iter()
        .map(|kind| PhaseResult::passing(*kind))
        .collect()
}

pub fn audit(phases: Vec<PhaseResult>) -> AuditInput {
    AuditInput {
        phases: phases.into_iter().map(PhaseOutcome::from).collect(),
        critical_issues: vec![],
    }
}

/// Clean audit whose performance phase measured `users` concurrent users.
pub fn clean_audit_with_capacity(users: u32) -> AuditInput {
    let phases = clean_phases()
        .into_iter()
        .map(|mut phase| {
            if phase.phase_name == PhaseKind::PerformanceAnalysis {
                phase.capacity_estimate = Some(users);
            }
            phase
        })
        .collect();
    audit(phases)
}

/// Medium-priority configuration findings that trip no risk, blocker or
/// performance rules.
pub fn medium_config_findings(count: usize) -> Vec<Finding> {
    (0..count)
        .map(|i| {
            Finding::new(
                format!("cfg-{i}"),
                Severity::Medium,
                Category::Config,
                format!("Unused key number {i} in app manifest"),
            )
            .with_evidence(format!("app.json line {}", i + 10))
        })
        .collect()
}

pub fn with_findings(
    mut phases: Vec<PhaseResult>,
    kind: PhaseKind,
    findings: Vec<Finding>,
) -> Vec<PhaseResult> {
    if let Some(phase) = phases.iter_mut().find(|p| p.phase_name == kind) {
        phase.status = Status::Fail;
        phase.results.extend(findings);
    }
    phases
}
