//! Concurrent-user capacity estimate and rating.
//!
//! Estimate precedence: configured override, then the performance phase's
//! structured `capacityEstimate`, then figures quoted in performance text,
//! then the configured baseline.

use crate::config::CapacityConfig;
use crate::core::{AuditInput, Category, Finding, PhaseKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static USER_COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,3}(?:,\d{3})+|\d+)\s+(?:concurrent\s+|simultaneous\s+|active\s+)?users")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityRating {
    Insufficient,
    LimitedCapacity,
    MeetsRequirements,
    ExceedsRequirements,
}

impl CapacityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityRating::Insufficient => "INSUFFICIENT",
            CapacityRating::LimitedCapacity => "LIMITED_CAPACITY",
            CapacityRating::MeetsRequirements => "MEETS_REQUIREMENTS",
            CapacityRating::ExceedsRequirements => "EXCEEDS_REQUIREMENTS",
        }
    }
}

impl fmt::Display for CapacityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacitySource {
    Configured,
    PhaseEstimate,
    ReportedText,
    Baseline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcurrentUserAssessment {
    pub estimated_users: u32,
    pub target_users: u32,
    pub source: CapacitySource,
    pub rating: CapacityRating,
}

/// Smallest user count quoted in any of `texts`.
pub fn extract_user_count<'a>(texts: impl IntoIterator<Item = &'a str>) -> Option<u32> {
    texts
        .into_iter()
        .flat_map(|text| USER_COUNT_PATTERN.captures_iter(text))
        .filter_map(|caps| caps.get(1)?.as_str().replace(',', "").parse::<u32>().ok())
        .min()
}

pub fn rate_capacity(estimated: u32, target: u32) -> CapacityRating {
    // Integer ratios keep the 1.5x and 0.7x edges exact.
    let estimated = u64::from(estimated);
    let target = u64::from(target);

    if estimated * 2 >= target * 3 {
        CapacityRating::ExceedsRequirements
    } else if estimated >= target {
        CapacityRating::MeetsRequirements
    } else if estimated * 10 >= target * 7 {
        CapacityRating::LimitedCapacity
    } else {
        CapacityRating::Insufficient
    }
}

fn reported_figure(input: &AuditInput, findings: &[Finding]) -> Option<u32> {
    let phase_recommendations = input
        .phase(PhaseKind::PerformanceAnalysis)
        .into_iter()
        .flat_map(|phase| phase.recommendations.iter().map(String::as_str));

    let finding_text = findings
        .iter()
        .filter(|f| f.category == Category::Performance)
        .flat_map(|f| {
            std::iter::once(f.message.as_str())
                .chain(f.details.as_deref())
                .chain(f.recommendations.iter().map(String::as_str))
        });

    extract_user_count(phase_recommendations.chain(finding_text))
}

pub fn assess_capacity(
    input: &AuditInput,
    findings: &[Finding],
    config: &CapacityConfig,
) -> ConcurrentUserAssessment {
    let structured = input
        .phase(PhaseKind::PerformanceAnalysis)
        .and_then(|phase| phase.capacity_estimate);

    let (estimated_users, source) = if let Some(users) = config.estimated_users {
        (users, CapacitySource::Configured)
    } else if let Some(users) = structured {
        (users, CapacitySource::PhaseEstimate)
    } else if let Some(users) = reported_figure(input, findings) {
        (users, CapacitySource::ReportedText)
    } else {
        (config.baseline_users, CapacitySource::Baseline)
    };

    let rating = rate_capacity(estimated_users, config.target_users);
    tracing::debug!(
        estimated_users,
        target_users = config.target_users,
        ?source,
        rating = %rating,
        "Assessed capacity"
    );

    ConcurrentUserAssessment {
        estimated_users,
        target_users: config.target_users,
        source,
        rating,
    }
}
