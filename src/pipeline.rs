//! End-to-end readiness evaluation.
//!
//! [`evaluate`] is total: any well-typed [`AuditInput`], including an empty
//! one, produces a complete [`ProductionReadinessVerdict`]. The reference date
//! is injected so identical inputs always give identical verdicts.

use crate::aggregation::categorize_issues;
use crate::assessment::{
    analyze_gaps, assess_capacity, assess_confidence, assess_health, assess_risk,
    format_fix_time, ConcurrentUserAssessment, ConfidenceLevelAssessment, CriticalGapAnalysis,
    RiskAssessment, SystemHealthAssessment,
};
use crate::classification::{classify_issues, ClassifiedIssue};
use crate::config::ShipgateConfig;
use crate::core::AuditInput;
use crate::decision::{synthesize, DecisionInputs, GoNoGoRecommendation, Recommendation};
use crate::normalize::normalize_input;
use crate::observability::{set_stage, PipelineStage};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

/// Buffer added after the fix estimate for a conditional release.
pub const CONDITIONAL_BUFFER_DAYS: u64 = 2;
/// Stabilization buffer added after the fix estimate for a blocked release.
pub const NO_GO_BUFFER_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOptions {
    pub config: ShipgateConfig,
    /// Day the audit is evaluated on; deployment dates are computed from it
    pub reference_date: NaiveDate,
}

impl EvaluationOptions {
    pub fn new(config: ShipgateConfig, reference_date: NaiveDate) -> Self {
        Self {
            config,
            reference_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReadinessVerdict {
    pub system_health_assessment: SystemHealthAssessment,
    pub concurrent_user_assessment: ConcurrentUserAssessment,
    pub critical_gap_analysis: CriticalGapAnalysis,
    pub risk_assessment: RiskAssessment,
    pub confidence_level_assessment: ConfidenceLevelAssessment,
    pub go_no_go_recommendation: GoNoGoRecommendation,
    pub total_issues_analyzed: usize,
    pub critical_issues_count: usize,
    pub deployment_blockers_count: usize,
    pub estimated_fix_time: String,
    pub recommended_deployment_date: Option<NaiveDate>,
    pub classified_issues: Vec<ClassifiedIssue>,
}

impl ProductionReadinessVerdict {
    pub fn recommendation(&self) -> Recommendation {
        self.go_no_go_recommendation.recommendation
    }
}

/// Earliest sensible release date for `outcome`. `None` when a redesign is
/// required.
pub fn recommended_deployment_date(
    outcome: Recommendation,
    fix_days: f64,
    reference_date: NaiveDate,
) -> Option<NaiveDate> {
    let fix_days = fix_days.max(0.0).ceil() as u64;
    let offset = match outcome {
        Recommendation::Go => 0,
        Recommendation::ConditionalGo => fix_days + CONDITIONAL_BUFFER_DAYS,
        Recommendation::NoGo => fix_days + NO_GO_BUFFER_DAYS,
        Recommendation::MajorRedesignRequired => return None,
    };
    reference_date.checked_add_days(Days::new(offset))
}

pub fn evaluate(input: &AuditInput, options: &EvaluationOptions) -> ProductionReadinessVerdict {
    let config = &options.config;
    let span = info_span!(
        "readiness_evaluation",
        phases = input.phases.len(),
        reference_date = %options.reference_date,
    );
    let _guard = span.enter();

    let findings = {
        let _stage = set_stage(PipelineStage::Normalization);
        let _span = info_span!("normalization").entered();
        let findings = normalize_input(input);
        debug!(findings = findings.len(), "Normalized findings");
        findings
    };

    let issues = {
        let _stage = set_stage(PipelineStage::Classification);
        let _span = info_span!("classification", findings = findings.len()).entered();
        classify_issues(&findings, &config.parallel)
    };

    let categorization = {
        let _stage = set_stage(PipelineStage::Aggregation);
        let _span = info_span!("aggregation").entered();
        categorize_issues(&issues)
    };
    let counts = categorization.counts;

    let (health, risk, confidence, capacity, gaps) = {
        let _stage = set_stage(PipelineStage::Assessment);
        let _span = info_span!("assessment").entered();
        (
            assess_health(&counts, input.passing_phase_count(), &config.scoring),
            assess_risk(&issues, &config.risk),
            assess_confidence(input, &findings, &config.confidence),
            assess_capacity(input, &findings, &config.capacity),
            analyze_gaps(&issues),
        )
    };

    let recommendation = {
        let _stage = set_stage(PipelineStage::Decision);
        let _span = info_span!("decision").entered();
        let inputs = DecisionInputs {
            health_score: health.health_score,
            overall_risk: risk.overall,
            confidence: confidence.level,
            capacity: capacity.rating,
            estimated_users: capacity.estimated_users,
            target_users: capacity.target_users,
            total_issues: counts.total,
            critical_issues: counts.critical,
            high_issues: counts.high,
            deployment_blockers: counts.deployment_blockers,
            fix_days: gaps.total_fix_days,
        };
        synthesize(&inputs, &config.decision)
    };

    let recommended_deployment_date = recommended_deployment_date(
        recommendation.recommendation,
        gaps.total_fix_days,
        options.reference_date,
    );

    info!(
        issues = counts.total,
        blockers = counts.deployment_blockers,
        health_score = health.health_score,
        recommendation = %recommendation.recommendation,
        "Evaluation complete"
    );

    ProductionReadinessVerdict {
        estimated_fix_time: format_fix_time(gaps.total_fix_days),
        total_issues_analyzed: counts.total,
        critical_issues_count: counts.critical,
        deployment_blockers_count: counts.deployment_blockers,
        recommended_deployment_date,
        system_health_assessment: health,
        concurrent_user_assessment: capacity,
        critical_gap_analysis: gaps,
        risk_assessment: risk,
        confidence_level_assessment: confidence,
        go_no_go_recommendation: recommendation,
        classified_issues: issues,
    }
}
