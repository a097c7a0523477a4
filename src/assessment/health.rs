//! System health score.
//!
//! Starts from 100, subtracts weighted penalties for counted issues, adds a
//! bonus per passing phase and clamps the result to `[0, 100]`.

use crate::aggregation::CategorizationCounts;
use crate::config::HealthWeights;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthRating {
    Critical,
    Poor,
    Acceptable,
    Good,
    Excellent,
}

impl HealthRating {
    /// Rating band for a clamped score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            HealthRating::Excellent
        } else if score >= 75.0 {
            HealthRating::Good
        } else if score >= 60.0 {
            HealthRating::Acceptable
        } else if score >= 30.0 {
            HealthRating::Poor
        } else {
            HealthRating::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthRating::Critical => "CRITICAL",
            HealthRating::Poor => "POOR",
            HealthRating::Acceptable => "ACCEPTABLE",
            HealthRating::Good => "GOOD",
            HealthRating::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed contribution of each scoring term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBreakdown {
    pub base: f64,
    pub critical_penalty: f64,
    pub high_penalty: f64,
    pub medium_penalty: f64,
    pub blocker_penalty: f64,
    pub security_penalty: f64,
    pub performance_penalty: f64,
    pub passing_phase_bonus: f64,
    /// Score before clamping
    pub raw_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealthAssessment {
    pub health_score: f64,
    pub rating: HealthRating,
    pub breakdown: HealthBreakdown,
}

fn penalty(count: usize, weight: u32) -> f64 {
    -(count as f64) * f64::from(weight)
}

pub fn assess_health(
    counts: &CategorizationCounts,
    passing_phases: usize,
    weights: &HealthWeights,
) -> SystemHealthAssessment {
    let mut breakdown = HealthBreakdown {
        base: 100.0,
        critical_penalty: penalty(counts.critical, weights.critical),
        high_penalty: penalty(counts.high, weights.high),
        medium_penalty: penalty(counts.medium, weights.medium),
        blocker_penalty: penalty(counts.deployment_blockers, weights.deployment_blocker),
        security_penalty: penalty(counts.security_vulnerabilities, weights.security_vulnerability),
        performance_penalty: penalty(
            counts.performance_bottlenecks,
            weights.performance_bottleneck,
        ),
        passing_phase_bonus: passing_phases as f64 * f64::from(weights.passing_phase),
        raw_score: 0.0,
    };
    breakdown.raw_score = breakdown.base
        + breakdown.critical_penalty
        + breakdown.high_penalty
        + breakdown.medium_penalty
        + breakdown.blocker_penalty
        + breakdown.security_penalty
        + breakdown.performance_penalty
        + breakdown.passing_phase_bonus;

    let health_score = breakdown.raw_score.clamp(0.0, 100.0);

    SystemHealthAssessment {
        health_score,
        rating: HealthRating::from_score(health_score),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_run_caps_at_100() {
        let health = assess_health(&CategorizationCounts::default(), 5, &HealthWeights::default());
        assert_eq!(health.health_score, 100.0);
        assert_eq!(health.breakdown.raw_score, 125.0);
        assert_eq!(health.rating, HealthRating::Excellent);
    }

    #[test]
    fn test_single_critical_security_blocker() {
        let counts = CategorizationCounts {
            total: 1,
            critical: 1,
            deployment_blockers: 1,
            security_vulnerabilities: 1,
            ..Default::default()
        };
        let health = assess_health(&counts, 0, &HealthWeights::default());
        assert_eq!(health.health_score, 25.0);
        assert_eq!(health.rating, HealthRating::Critical);
    }

    #[test]
    fn test_rating_band_edges() {
        assert_eq!(HealthRating::from_score(90.0), HealthRating::Excellent);
        assert_eq!(HealthRating::from_score(89.9), HealthRating::Good);
        assert_eq!(HealthRating::from_score(75.0), HealthRating::Good);
        assert_eq!(HealthRating::from_score(60.0), HealthRating::Acceptable);
        assert_eq!(HealthRating::from_score(30.0), HealthRating::Poor);
        assert_eq!(HealthRating::from_score(29.9), HealthRating::Critical);
    }

    proptest! {
        #[test]
        fn score_stays_in_bounds(
            critical in 0usize..50,
            high in 0usize..50,
            medium in 0usize..50,
            blockers in 0usize..50,
            security in 0usize..50,
            performance in 0usize..50,
            passing in 0usize..10,
        ) {
            let counts = CategorizationCounts {
                total: critical + high + medium,
                critical,
                high,
                medium,
                low: 0,
                deployment_blockers: blockers,
                security_vulnerabilities: security,
                performance_bottlenecks: performance,
            };
            let health = assess_health(&counts, passing, &HealthWeights::default());
            prop_assert!((0.0..=100.0).contains(&health.health_score));
        }
    }
}
