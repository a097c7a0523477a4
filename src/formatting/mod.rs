use crate::assessment::{CapacityRating, ConfidenceLevel, HealthRating};
use crate::classification::{Priority, RiskLevel};
use crate::decision::Recommendation;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// No colors, ASCII markers only
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Colors verdict values by how good or bad they are.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.color.should_use_color();
        colored::control::set_override(color);
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn bad(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn recommendation(&self, rec: Recommendation) -> String {
        match rec {
            Recommendation::Go => self.good(rec.as_str()),
            Recommendation::ConditionalGo => self.warn(rec.as_str()),
            Recommendation::NoGo | Recommendation::MajorRedesignRequired => {
                self.bad(rec.as_str())
            }
        }
    }

    pub fn risk(&self, level: RiskLevel) -> String {
        match level {
            RiskLevel::Low => self.good(level.as_str()),
            RiskLevel::Medium => self.warn(level.as_str()),
            RiskLevel::High | RiskLevel::Critical => self.bad(level.as_str()),
        }
    }

    pub fn priority(&self, priority: Priority) -> String {
        match priority {
            Priority::Low => self.dim(priority.as_str()),
            Priority::Medium => self.warn(priority.as_str()),
            Priority::High | Priority::Critical => self.bad(priority.as_str()),
        }
    }

    pub fn health(&self, rating: HealthRating) -> String {
        match rating {
            HealthRating::Excellent | HealthRating::Good => self.good(rating.as_str()),
            HealthRating::Acceptable => self.warn(rating.as_str()),
            HealthRating::Poor | HealthRating::Critical => self.bad(rating.as_str()),
        }
    }

    pub fn confidence(&self, level: ConfidenceLevel) -> String {
        match level {
            ConfidenceLevel::High => self.good(level.as_str()),
            ConfidenceLevel::Medium => self.warn(level.as_str()),
            ConfidenceLevel::Low => self.bad(level.as_str()),
        }
    }

    pub fn capacity(&self, rating: CapacityRating) -> String {
        match rating {
            CapacityRating::ExceedsRequirements | CapacityRating::MeetsRequirements => {
                self.good(rating.as_str())
            }
            CapacityRating::LimitedCapacity => self.warn(rating.as_str()),
            CapacityRating::Insufficient => self.bad(rating.as_str()),
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
