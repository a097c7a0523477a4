//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline stage and which finding are being processed. Uses
//! thread-local storage for per-thread context (works with rayon parallel
//! iterators) and atomic counters for global classification progress.
//!
//! ## Thread Safety
//!
//! - Thread-local context: Each thread has its own context (via `thread_local!`)
//! - Global progress: Atomic counters for findings classified/total
//! - Context guards use RAII for automatic cleanup on drop

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

static FINDINGS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FINDINGS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<EvaluationContext> = const { RefCell::new(EvaluationContext::new()) };
}

/// Context snapshot for the current evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    /// Current pipeline stage
    pub stage: Option<PipelineStage>,
    /// Id of the finding currently being classified
    pub current_finding: Option<String>,
}

impl EvaluationContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: None,
            current_finding: None,
        }
    }
}

/// Stages of a readiness evaluation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Flattening and deduplicating phase findings
    Normalization,
    /// Classifying each finding
    Classification,
    /// Building grouped views over classified issues
    Aggregation,
    /// Health, risk, confidence, capacity and gap assessments
    Assessment,
    /// Applying the Go/No-Go rules
    Decision,
    /// Writing the verdict
    OutputGeneration,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normalization => write!(f, "normalization"),
            Self::Classification => write!(f, "classification"),
            Self::Aggregation => write!(f, "aggregation"),
            Self::Assessment => write!(f, "assessment"),
            Self::Decision => write!(f, "decision"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring context on drop.
pub struct ContextGuard {
    previous: EvaluationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current pipeline stage.
///
/// Returns a guard that restores the previous stage on drop.
///
/// # Example
///
/// ```ignore
/// let _stage = set_stage(PipelineStage::Aggregation);
/// // Do aggregation work...
/// // Stage automatically restored when _stage drops
/// ```
#[must_use]
pub fn set_stage(stage: PipelineStage) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().stage = Some(stage);
        ContextGuard { previous }
    })
}

/// Set the finding currently being classified.
#[must_use]
pub fn set_current_finding(id: impl Into<String>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_finding = Some(id.into());
        ContextGuard { previous }
    })
}

/// Set the progress counters (processed and total findings).
pub fn set_progress(processed: usize, total: usize) {
    FINDINGS_PROCESSED.store(processed, Ordering::Relaxed);
    FINDINGS_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the processed finding count.
///
/// Thread-safe; called from parallel iterators.
pub fn increment_processed() {
    FINDINGS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> EvaluationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Get the current progress (processed, total).
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        FINDINGS_PROCESSED.load(Ordering::Relaxed),
        FINDINGS_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = EvaluationContext::new();
    });
}
