use crate::formatting::Styler;
use crate::pipeline::ProductionReadinessVerdict;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_verdict(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_verdict(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(verdict)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_verdict(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        self.write_header(verdict)?;
        self.write_summary(verdict)?;
        self.write_gaps(verdict)?;
        self.write_guidance(verdict)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let decision = &verdict.go_no_go_recommendation;
        writeln!(self.writer, "# Production Readiness: {}", decision.recommendation)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", decision.justification)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let health = &verdict.system_health_assessment;
        let risk = &verdict.risk_assessment;
        let confidence = &verdict.confidence_level_assessment;
        let capacity = &verdict.concurrent_user_assessment;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row(
            "Health score",
            &format!("{:.0}/100 ({})", health.health_score, health.rating),
        )?;
        self.write_row("Overall risk", risk.overall.as_str())?;
        self.write_row(
            "Confidence",
            &format!("{} ({:.0})", confidence.level, confidence.overall_score),
        )?;
        self.write_row(
            "Capacity",
            &format!(
                "{} ({} of {} users)",
                capacity.rating, capacity.estimated_users, capacity.target_users
            ),
        )?;
        self.write_row("Issues analyzed", &verdict.total_issues_analyzed.to_string())?;
        self.write_row("Critical issues", &verdict.critical_issues_count.to_string())?;
        self.write_row(
            "Deployment blockers",
            &verdict.deployment_blockers_count.to_string(),
        )?;
        self.write_row("Estimated fix time", &verdict.estimated_fix_time)?;
        self.write_row(
            "Recommended deployment",
            &verdict
                .recommended_deployment_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "after redesign".to_string()),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_gaps(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let gaps = &verdict.critical_gap_analysis;
        for (title, list) in [("Must fix", &gaps.must_fix), ("Should fix", &gaps.should_fix)] {
            if list.is_empty() {
                continue;
            }
            writeln!(self.writer, "## {title} ({})", list.len())?;
            writeln!(self.writer)?;
            for issue in list {
                writeln!(
                    self.writer,
                    "- [ ] `{}` **{}** {} ({})",
                    issue.id, issue.priority, issue.message, issue.estimated_fix_time
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_guidance(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let decision = &verdict.go_no_go_recommendation;
        let sections = [
            ("Conditions", &decision.conditions),
            ("Next steps", &decision.next_steps),
            ("Rollback plan", &decision.rollback_plan),
            ("Monitoring", &decision.monitoring_requirements),
            ("Success criteria", &decision.success_criteria),
        ];

        writeln!(self.writer, "## Timeline")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", decision.timeline)?;
        writeln!(self.writer)?;

        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            writeln!(self.writer, "## {title}")?;
            writeln!(self.writer)?;
            for (i, item) in items.iter().enumerate() {
                writeln!(self.writer, "{}. {item}", i + 1)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    styler: Styler,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, styler: Styler) -> Self {
        Self { writer, styler }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_verdict(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        self.print_header(verdict)?;
        self.print_assessments(verdict)?;
        self.print_blockers(verdict)?;
        self.print_guidance(verdict)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let s = self.styler;
        let decision = &verdict.go_no_go_recommendation;
        writeln!(self.writer, "{}", s.header("Production Readiness Verdict"))?;
        writeln!(self.writer, "{}", s.header("============================"))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  Recommendation: {} {}",
            s.recommendation(decision.recommendation),
            s.dim(&format!("(rule: {})", decision.rule_applied))
        )?;
        writeln!(self.writer, "  {}", decision.justification)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_assessments(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let s = self.styler;
        let health = &verdict.system_health_assessment;
        let risk = &verdict.risk_assessment;
        let confidence = &verdict.confidence_level_assessment;
        let capacity = &verdict.concurrent_user_assessment;

        writeln!(self.writer, "{}", s.bold("Assessments:"))?;
        writeln!(
            self.writer,
            "  Health:     {:.0}/100 {}",
            health.health_score,
            s.health(health.rating)
        )?;
        writeln!(
            self.writer,
            "  Risk:       {} (security {}, performance {}, reliability {}, ux {})",
            s.risk(risk.overall),
            risk.security,
            risk.performance,
            risk.reliability,
            risk.user_experience
        )?;
        writeln!(
            self.writer,
            "  Confidence: {} ({:.0})",
            s.confidence(confidence.level),
            confidence.overall_score
        )?;
        writeln!(
            self.writer,
            "  Capacity:   {} ({} of {} users)",
            s.capacity(capacity.rating),
            capacity.estimated_users,
            capacity.target_users
        )?;
        writeln!(
            self.writer,
            "  Issues:     {} total, {} critical, {} blockers, fix estimate {}",
            verdict.total_issues_analyzed,
            verdict.critical_issues_count,
            verdict.deployment_blockers_count,
            verdict.estimated_fix_time
        )?;
        if let Some(date) = verdict.recommended_deployment_date {
            writeln!(self.writer, "  Deploy on:  {date}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_blockers(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let s = self.styler;
        let must_fix = &verdict.critical_gap_analysis.must_fix;
        if must_fix.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer,
            "{} ({}):",
            s.bad("Deployment blockers"),
            must_fix.len()
        )?;
        for issue in must_fix.iter().take(10) {
            writeln!(
                self.writer,
                "  - [{}] {} {}",
                s.priority(issue.priority),
                issue.id,
                issue.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_guidance(&mut self, verdict: &ProductionReadinessVerdict) -> anyhow::Result<()> {
        let s = self.styler;
        let decision = &verdict.go_no_go_recommendation;

        if !decision.conditions.is_empty() {
            writeln!(self.writer, "{}", s.warn("Conditions:"))?;
            for condition in &decision.conditions {
                writeln!(self.writer, "  - {condition}")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", s.bold("Next steps:"))?;
        for (i, step) in decision.next_steps.iter().enumerate() {
            writeln!(self.writer, "  {}. {step}", i + 1)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Timeline: {}", decision.timeline)?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    out: Box<dyn Write + 'a>,
    styler: Styler,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out, styler)),
    }
}
