//! Observability infrastructure for crash reports and logging.
//!
//! ## Features
//!
//! - **Panic Hook**: Produces structured crash reports with context
//! - **Context Tracking**: Thread-local pipeline stage and finding tracking
//! - **Tracing**: stderr subscriber driven by `RUST_LOG` or `-v` flags
//!
//! ## Usage
//!
//! ```ignore
//! use shipgate::observability::{install_panic_hook, init_tracing};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_finding, set_progress,
    set_stage, ContextGuard, EvaluationContext, PipelineStage,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::init_tracing;
