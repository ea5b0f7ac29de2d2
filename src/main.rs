//! container-hello CLI - print what a program sees from inside a container

use std::io::IsTerminal;

use anyhow::Context as _;
use tracing::debug;

use container_hello::cli::Args;
use container_hello::output::format_error;
use container_hello::{
    logging, DemoRunner, ExitOutcome, Interrupt, RunConfig, StdinMode, TerminalReader,
};

fn main() {
    let outcome = match run() {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{}", format_error(&format!("{:#}", e)));
            ExitOutcome::Failure
        }
    };

    std::process::exit(outcome.code());
}

fn run() -> anyhow::Result<ExitOutcome> {
    // Must precede every other setup step
    let interrupt = Interrupt::install().context("failed to install Ctrl+C handler")?;

    let config = RunConfig::from_env()?;
    logging::init_tracing(config.log_json);

    let args = Args::from_env()?;

    let stdin = if std::io::stdin().is_terminal() {
        StdinMode::Interactive(Box::new(TerminalReader::new()?))
    } else {
        StdinMode::NonInteractive
    };
    debug!(
        interactive = matches!(stdin, StdinMode::Interactive(_)),
        delay_ms = config.step_delay.as_millis() as u64,
        "starting demo"
    );

    let mut runner = DemoRunner::new(std::io::stdout(), config, interrupt, (&args).into(), stdin);
    Ok(runner.execute())
}
