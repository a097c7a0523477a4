pub mod errors;
pub mod types;

use serde::{Deserialize, Serialize};

pub use errors::{Result, ShipgateError};
pub use types::{Category, PhaseKind, Severity, Status};

/// A single raw observation emitted by an analysis phase.
///
/// Findings are immutable once produced; `id` is the identity used for
/// deduplication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl Finding {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            status: Status::Fail,
            severity,
            category,
            message: message.into(),
            details: None,
            evidence: Vec::new(),
            recommendations: Vec::new(),
            timestamp: String::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence.push(evidence.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Lowercased `message` and `details` joined by a space. A missing
    /// `details` contributes an empty string.
    pub fn content(&self) -> String {
        let details = self.details.as_deref().unwrap_or("");
        format!("{} {}", self.message, details).to_lowercase()
    }

    pub fn has_evidence(&self) -> bool {
        self.evidence.iter().any(|e| !e.trim().is_empty())
    }
}

/// Output of one analysis phase that ran to completion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    pub phase_name: PhaseKind,
    pub status: Status,
    #[serde(default)]
    pub results: Vec<Finding>,
    #[serde(default)]
    pub critical_issues: Vec<Finding>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Concurrent-user capacity measured by the performance phase, when it
    /// reports one directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_estimate: Option<u32>,
}

impl PhaseResult {
    pub fn new(phase_name: PhaseKind, status: Status) -> Self {
        Self {
            phase_name,
            status,
            results: Vec::new(),
            critical_issues: Vec::new(),
            recommendations: Vec::new(),
            capacity_estimate: None,
        }
    }

    pub fn passing(phase_name: PhaseKind) -> Self {
        Self::new(phase_name, Status::Pass)
    }
}

/// A phase whose analyzer raised an error instead of producing results.
///
/// Only `phaseName` and `error` are accepted, so an object that also carries
/// completed-phase fields such as `status` parses as a [`PhaseResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhaseFailure {
    pub phase_name: PhaseKind,
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhaseOutcome {
    Failed(PhaseFailure),
    Completed(PhaseResult),
}

impl PhaseOutcome {
    pub fn phase(&self) -> PhaseKind {
        match self {
            PhaseOutcome::Failed(failure) => failure.phase_name,
            PhaseOutcome::Completed(result) => result.phase_name,
        }
    }

    pub fn completed(&self) -> Option<&PhaseResult> {
        match self {
            PhaseOutcome::Completed(result) => Some(result),
            PhaseOutcome::Failed(_) => None,
        }
    }
}

impl From<PhaseResult> for PhaseOutcome {
    fn from(result: PhaseResult) -> Self {
        PhaseOutcome::Completed(result)
    }
}

impl From<PhaseFailure> for PhaseOutcome {
    fn from(failure: PhaseFailure) -> Self {
        PhaseOutcome::Failed(failure)
    }
}

/// Everything the analyzer phases handed over for one audit run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditInput {
    #[serde(default)]
    pub phases: Vec<PhaseOutcome>,
    /// Issues not attached to any single phase
    #[serde(default)]
    pub critical_issues: Vec<Finding>,
}

impl AuditInput {
    pub fn completed_phases(&self) -> impl Iterator<Item = &PhaseResult> {
        self.phases.iter().filter_map(PhaseOutcome::completed)
    }

    pub fn passing_phase_count(&self) -> usize {
        self.completed_phases()
            .filter(|phase| phase.status == Status::Pass)
            .count()
    }

    pub fn phase(&self, kind: PhaseKind) -> Option<&PhaseResult> {
        self.completed_phases().find(|phase| phase.phase_name == kind)
    }
}
