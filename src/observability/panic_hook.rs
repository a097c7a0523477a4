//! Custom panic hook for structured crash reports.
//!
//! The evaluation pipeline is total, so a panic means a bug. The report shows
//! which stage and finding were being processed so it can be reproduced.

use super::context::{get_current_context, get_progress, EvaluationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call early in `main()` before evaluation begins.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    eprintln!();
    eprintln!("{RULE}");
    eprintln!("SHIPGATE CRASH REPORT");
    eprintln!("  Version:  {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!(
        "  Time:     {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    eprintln!("{RULE}");
    eprintln!("  PANIC: {}", truncate(&extract_panic_message(info), 70));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    for line in context_lines(&context, processed, total) {
        eprintln!("  {line}");
    }
    if let Some(metadata) = Span::current().metadata() {
        eprintln!("  Span: {}", metadata.name());
    }
    eprintln!("{RULE}");
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

fn context_lines(context: &EvaluationContext, processed: usize, total: usize) -> Vec<String> {
    let mut lines = Vec::new();
    match &context.stage {
        Some(stage) => lines.push(format!("Stage: {stage}")),
        None => lines.push("Stage: (not set - crash occurred before evaluation started)".into()),
    }
    if let Some(finding) = &context.current_finding {
        lines.push(format!("Finding: {}", truncate(finding, 60)));
    }
    if total > 0 {
        let pct = (processed as f64 / total as f64 * 100.0) as usize;
        lines.push(format!("Progress: {processed} / {total} findings ({pct}%)"));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
