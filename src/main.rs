use anyhow::Result;
use shipgate::cli::{parse_args, Commands};
use shipgate::commands::{handle_evaluate, init_config, user_hint, EvaluateConfig};
use shipgate::formatting::{ColorMode, FormattingConfig};
use shipgate::observability::{init_tracing, install_panic_hook};
use std::process::ExitCode;

/// Exit status when `--fail-on-no-go` is set and the release is blocked
const BLOCKED_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    install_panic_hook();
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(&e),
    };
    init_tracing(cli.command.verbosity());

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(hint) = user_hint(&e) {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Help and version go to stdout and succeed; usage errors exit 1.
fn usage_exit(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Evaluate {
            input,
            config,
            format,
            output,
            date,
            test_coverage,
            capacity,
            no_parallel,
            fail_on_no_go,
            plain,
            color,
            verbosity: _,
        } => {
            let recommendation = handle_evaluate(EvaluateConfig {
                input,
                config,
                format: format.into(),
                output,
                date,
                test_coverage,
                capacity,
                no_parallel,
                formatting_config: create_formatting_config(plain, color),
            })?;

            if fail_on_no_go && !recommendation.allows_deployment() {
                return Ok(ExitCode::from(BLOCKED_EXIT_CODE));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn create_formatting_config(plain: bool, color: Option<ColorMode>) -> FormattingConfig {
    match (plain, color) {
        (true, _) => FormattingConfig::plain(),
        (false, Some(mode)) => FormattingConfig::new(mode),
        (false, None) => FormattingConfig::from_env(),
    }
}
