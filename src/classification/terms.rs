//! Term sets matched against lowercased finding content.
//!
//! Matching is plain substring search unless noted otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

/// Exploits, crashes and corruption. Any match makes an issue critical and
/// blocks deployment.
pub const CRITICAL_TERMS: &[&str] = &[
    "sql injection",
    "code injection",
    "command injection",
    "remote code execution",
    "authentication bypass",
    "auth bypass",
    "privilege escalation",
    "session hijack",
    "data breach",
    "exposed secret",
    "hardcoded secret",
    "hardcoded credential",
    "crash",
    "deadlock",
    "data corruption",
    "corrupted",
    "data loss",
];

/// Scalability limits, races and resource exhaustion.
pub const HIGH_TERMS: &[&str] = &[
    "bottleneck",
    "scalability limit",
    "does not scale",
    "race condition",
    "resource exhaustion",
    "pool exhaust",
    "memory leak",
    "concurrency limit",
    "concurrent user limit",
    "lock contention",
];

/// Validation gaps, inefficiency and configuration issues.
pub const MEDIUM_TERMS: &[&str] = &[
    "validation",
    "unvalidated",
    "inefficient",
    "inefficiency",
    "slow query",
    "redundant",
    "misconfigur",
    "configuration issue",
    "deprecated",
];

/// Explicit blocker wording from analyzers.
pub const EXPLICIT_BLOCKER_TERMS: &[&str] = &[
    "deployment blocker",
    "production blocker",
    "release blocker",
    "blocks deployment",
];

pub const BLOCKER_IMPACT_TERMS: &[&str] = &["deployment", "blocker", "critical"];

pub const PERFORMANCE_IMPACT_TERMS: &[&str] =
    &["performance", "scalability", "bottleneck", "timeout", "latency"];

pub const USER_IMPACT_TERMS: &[&str] = &["user", "experience", "workflow", "usability"];

pub const EXTENSIVE_EFFORT_TERMS: &[&str] =
    &["redesign", "refactor", "architecture", "architectural"];

/// Native-module and access-policy work needs platform or database specialists.
pub const SPECIALIST_EFFORT_TERMS: &[&str] = &[
    "native module",
    "nativemodule",
    "turbomodule",
    "jsi",
    "row level security",
    "policy",
    "policies",
];

pub const MODERATE_EFFORT_TERMS: &[&str] = &["configuration", "integration"];

pub const SECURITY_CRITICAL_TERMS: &[&str] = &[
    "sql injection",
    "code injection",
    "command injection",
    "script injection",
    "remote code execution",
    "authentication bypass",
    "auth bypass",
    "privilege escalation",
    "session hijack",
    "data breach",
    "exposed secret",
    "hardcoded secret",
    "hardcoded credential",
];

pub const SECURITY_HIGH_TERMS: &[&str] = &[
    "xss",
    "cross-site",
    "csrf",
    "unauthorized",
    "insecure",
    "weak encryption",
    "unencrypted",
    "plaintext",
    "missing rls",
    "permission bypass",
];

pub const SECURITY_MEDIUM_TERMS: &[&str] = &[
    "sanitiz",
    "input validation",
    "missing validation",
    "token",
    "permission",
    "cors",
    "rate limit",
];

pub const RELIABILITY_CRITICAL_TERMS: &[&str] = &[
    "crash",
    "deadlock",
    "data corruption",
    "corrupted",
    "data loss",
    "unrecoverable",
];

pub const RELIABILITY_HIGH_TERMS: &[&str] = &[
    "race condition",
    "memory leak",
    "resource exhaustion",
    "pool exhaust",
    "timeout",
    "unhandled exception",
    "unhandled error",
];

pub const RELIABILITY_MEDIUM_TERMS: &[&str] = &[
    "retry",
    "error handling",
    "fallback",
    "flaky",
    "intermittent",
];

pub const PERFORMANCE_SEVERE_TERMS: &[&str] = &[
    "bottleneck",
    "resource exhaustion",
    "pool exhaust",
    "concurrency limit",
    "does not scale",
    "scalability limit",
    "memory leak",
];

pub const PERFORMANCE_MODERATE_TERMS: &[&str] = &[
    "slow",
    "latency",
    "timeout",
    "n+1",
    "inefficien",
    "blocking",
];

pub const PERFORMANCE_MINOR_TERMS: &[&str] = &["performance", "optimiz", "cache", "redundant"];

pub const UX_SEVERE_TERMS: &[&str] = &[
    "crash",
    "data loss",
    "cannot log in",
    "unable to",
    "blank screen",
    "freeze",
];

pub const UX_MODERATE_TERMS: &[&str] = &["user", "workflow", "usability", "slow", "laggy", "lagging"];

pub const UX_MINOR_TERMS: &[&str] = &["experience", "layout", "display", "visual", "cosmetic"];

// Word-bounded so "inconsistent" does not read as "consistent".
pub static ALWAYS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(always|every\s?time|every request|consistent(ly)?)\b").expect("valid regex")
});

pub static FREQUENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(frequent(ly)?|often)\b").expect("valid regex"));

pub static OCCASIONAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(occasional(ly)?|sometimes|intermittent(ly)?)\b").expect("valid regex")
});

/// Whether `content` contains any of `terms`.
pub fn mentions_any(content: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| content.contains(term))
}
