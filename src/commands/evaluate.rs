use crate::config::{load_config, load_config_from_path, validate_config, ShipgateConfig};
use crate::decision::Recommendation;
use crate::formatting::{FormattingConfig, Styler};
use crate::io::output::{create_writer, OutputFormat};
use crate::observability::{set_stage, PipelineStage};
use crate::pipeline::{evaluate, EvaluationOptions};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct EvaluateConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub test_coverage: Option<f64>,
    pub capacity: Option<u32>,
    pub no_parallel: bool,
    pub formatting_config: FormattingConfig,
}

/// Resolve the configuration file and apply command-line overrides on top.
pub fn resolve_config(config: &EvaluateConfig) -> Result<ShipgateConfig> {
    let mut resolved = match &config.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    if let Some(coverage) = config.test_coverage {
        resolved.confidence.test_coverage = coverage;
    }
    if let Some(users) = config.capacity {
        resolved.capacity.estimated_users = Some(users);
    }
    if config.no_parallel {
        resolved.parallel.enabled = false;
    }

    validate_config(&resolved)?;
    Ok(resolved)
}

pub fn handle_evaluate(config: EvaluateConfig) -> Result<Recommendation> {
    let resolved = resolve_config(&config)?;
    let input = crate::io::load_audit_input(&config.input)
        .with_context(|| format!("Failed to load audit input {}", config.input.display()))?;

    let reference_date = config
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let options = EvaluationOptions::new(resolved, reference_date);
    let verdict = evaluate(&input, &options);

    let _stage = set_stage(PipelineStage::OutputGeneration);
    let styler = match config.output {
        Some(_) => Styler::plain(),
        None => Styler::new(config.formatting_config),
    };
    let out: Box<dyn Write> = match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                crate::io::ensure_dir(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(config.format, out, styler);
    writer.write_verdict(&verdict)?;

    Ok(verdict.recommendation())
}
