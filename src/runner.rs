//! The demo sequence
//!
//! `DemoRunner` prints a fixed series of sections to its writer. Two failures
//! are handled where they happen (an unreadable directory, a cancelled name
//! prompt); anything else ends the run through [`DemoRunner::execute`].

use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::{DemoError, Result};
use crate::interrupt::Interrupt;
use crate::output::*;
use crate::probe::*;
use crate::prompt::{greeting_name, LineReader, PromptOutcome};

/// Iterations of the simulated work loop
pub const WORK_STEPS: usize = 3;

/// How a run ended, as reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    InterruptedByUser,
    Failure,
}

impl ExitOutcome {
    pub fn code(self) -> i32 {
        match self {
            ExitOutcome::Success => 0,
            ExitOutcome::InterruptedByUser | ExitOutcome::Failure => 1,
        }
    }
}

/// Whether stdin may be read, and through what
pub enum StdinMode {
    Interactive(Box<dyn LineReader>),
    NonInteractive,
}

pub struct DemoRunner<W: Write> {
    out: W,
    config: RunConfig,
    interrupt: Interrupt,
    arguments: ArgumentReport,
    stdin: StdinMode,
}

impl<W: Write> DemoRunner<W> {
    pub fn new(
        out: W,
        config: RunConfig,
        interrupt: Interrupt,
        arguments: ArgumentReport,
        stdin: StdinMode,
    ) -> Self {
        Self {
            out,
            config,
            interrupt,
            arguments,
            stdin,
        }
    }

    /// Run every step and turn the result into an exit outcome, printing the
    /// farewell or error message on the way out
    pub fn execute(&mut self) -> ExitOutcome {
        match self.run() {
            Ok(()) => ExitOutcome::Success,
            Err(DemoError::Interrupted) => {
                debug!("run interrupted by user");
                writeln!(self.out, "{}", format_farewell()).ok();
                self.out.flush().ok();
                ExitOutcome::InterruptedByUser
            }
            Err(e) => {
                warn!(error = %e, "run failed");
                writeln!(self.out, "{}", format_error(&e)).ok();
                self.out.flush().ok();
                ExitOutcome::Failure
            }
        }
    }

    /// The fixed step sequence. Stops at the first error.
    pub fn run(&mut self) -> Result<()> {
        self.step("banner")?;
        writeln!(self.out, "{}", format_banner())?;

        self.step("runtime")?;
        let runtime = query_runtime()?;
        writeln!(self.out, "{}", format_runtime(&runtime))?;

        self.step("container")?;
        let container = query_container()?;
        writeln!(self.out, "{}", format_container(&container))?;

        self.step("environment")?;
        writeln!(self.out, "{}", format_environment(&EnvironmentSnapshot::capture()))?;

        self.step("files")?;
        writeln!(self.out, "{}", format_file_check_header())?;
        let listing = list_directory(Path::new("."))?;
        if listing == DirectoryListing::PermissionDenied {
            debug!("directory listing denied");
        }
        writeln!(self.out, "{}", format_listing(&listing))?;

        self.step("computation")?;
        writeln!(self.out, "{}", format_computation(&NumberSample::default()))?;

        self.step("arguments")?;
        writeln!(self.out, "{}", format_arguments(&self.arguments))?;

        self.step("interactivity")?;
        self.ask_name()?;

        self.step("work")?;
        self.simulate_work()?;

        self.step("recap")?;
        writeln!(self.out, "{}", format_recap())?;
        self.out.flush()?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn step(&mut self, name: &str) -> Result<()> {
        self.interrupt.checkpoint()?;
        debug!(step = name, "running step");
        Ok(())
    }

    fn ask_name(&mut self) -> Result<()> {
        let reader = match &mut self.stdin {
            StdinMode::Interactive(reader) => reader,
            StdinMode::NonInteractive => {
                writeln!(self.out, "\n{}", NON_INTERACTIVE)?;
                return Ok(());
            }
        };

        writeln!(self.out, "\n{}", INTERACTIVE_BANNER)?;
        self.out.flush()?;

        self.interrupt.checkpoint()?;
        let outcome = reader.read_line(NAME_PROMPT)?;
        // A Ctrl+C that arrived while the read was blocked cancels the read only
        let interrupted = self.interrupt.take();

        if interrupted || outcome == PromptOutcome::Cancelled {
            writeln!(self.out, "\n{}", INPUT_SKIPPED)?;
        } else if let Some(name) = greeting_name(&outcome) {
            writeln!(self.out, "{}", format_greeting(name))?;
        }

        Ok(())
    }

    fn simulate_work(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", WORK_BANNER)?;
        self.out.flush()?;

        for step in 1..=WORK_STEPS {
            self.interrupt.sleep(self.config.step_delay)?;
            writeln!(self.out, "{}", format_progress(step, WORK_STEPS))?;
            self.out.flush()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedReader;
    use std::time::Duration;

    fn quick_config() -> RunConfig {
        RunConfig {
            step_delay: Duration::ZERO,
            log_json: false,
        }
    }

    fn arguments(extra: &[&str]) -> ArgumentReport {
        ArgumentReport {
            program: "container-hello".into(),
            extra: extra.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run_with(
        config: RunConfig,
        interrupt: Interrupt,
        stdin: StdinMode,
    ) -> (ExitOutcome, String) {
        let mut runner = DemoRunner::new(Vec::new(), config, interrupt, arguments(&[]), stdin);
        let outcome = runner.execute();
        let output = String::from_utf8(runner.into_inner()).unwrap();
        (outcome, output)
    }

    fn interactive(outcomes: Vec<PromptOutcome>) -> StdinMode {
        StdinMode::Interactive(Box::new(ScriptedReader::new(outcomes)))
    }

    fn progress_lines(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter(|l| l.trim_start().starts_with("Processing step"))
            .collect()
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitOutcome::Success.code(), 0);
        assert_eq!(ExitOutcome::InterruptedByUser.code(), 1);
        assert_eq!(ExitOutcome::Failure.code(), 1);
    }

    #[test]
    fn test_full_run_non_interactive() {
        let (outcome, output) = run_with(quick_config(), Interrupt::new(), StdinMode::NonInteractive);

        assert_eq!(outcome, ExitOutcome::Success);
        assert!(output.starts_with(BANNER));
        assert!(output.contains(NON_INTERACTIVE));
        assert!(!output.contains(INTERACTIVE_BANNER));
        assert!(output.contains("Sum: 15"));
        assert!(output.contains(NO_ARGUMENTS));
        assert!(output.contains(SUCCESS_BANNER));
        assert_eq!(
            progress_lines(&output),
            vec![
                "  Processing step 1/3...",
                "  Processing step 2/3...",
                "  Processing step 3/3...",
            ]
        );
    }

    #[test]
    fn test_sections_in_order() {
        let (_, output) = run_with(quick_config(), Interrupt::new(), StdinMode::NonInteractive);

        let markers = [
            BANNER,
            "Container Information:",
            "Environment Variables:",
            "File System Check:",
            "Simple Computation:",
            "Command Line Arguments:",
            NON_INTERACTIVE,
            WORK_BANNER,
            SUCCESS_BANNER,
        ];
        let positions: Vec<usize> = markers.iter().map(|m| output.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_interactive_greeting() {
        let (outcome, output) = run_with(
            quick_config(),
            Interrupt::new(),
            interactive(vec![PromptOutcome::Line("Ferris".into())]),
        );

        assert_eq!(outcome, ExitOutcome::Success);
        assert!(output.contains(INTERACTIVE_BANNER));
        assert!(output.contains("Hello, Ferris! Welcome to Docker with Rust!"));
        assert!(!output.contains(NON_INTERACTIVE));
    }

    #[test]
    fn test_interactive_blank_name_skips_greeting() {
        let (outcome, output) = run_with(
            quick_config(),
            Interrupt::new(),
            interactive(vec![PromptOutcome::Line("   ".into())]),
        );

        assert_eq!(outcome, ExitOutcome::Success);
        assert!(!output.contains("Hello,"));
        assert!(!output.contains(INPUT_SKIPPED));
    }

    #[test]
    fn test_interactive_cancel_continues() {
        let (outcome, output) = run_with(
            quick_config(),
            Interrupt::new(),
            interactive(vec![PromptOutcome::Cancelled]),
        );

        assert_eq!(outcome, ExitOutcome::Success);
        assert!(output.contains(INPUT_SKIPPED));
        assert!(!output.contains("Hello,"));
        assert_eq!(progress_lines(&output).len(), WORK_STEPS);
        assert!(!output.contains(FAREWELL));
    }

    /// Raises the interrupt while "blocked" in the read, like a signal would
    struct SignalDuringRead(Interrupt);

    impl LineReader for SignalDuringRead {
        fn read_line(&mut self, _prompt: &str) -> Result<PromptOutcome> {
            self.0.raise();
            Ok(PromptOutcome::Line("ignored".into()))
        }
    }

    #[test]
    fn test_signal_during_read_is_local() {
        let interrupt = Interrupt::new();
        let reader = SignalDuringRead(interrupt.clone());
        let (outcome, output) = run_with(
            quick_config(),
            interrupt,
            StdinMode::Interactive(Box::new(reader)),
        );

        assert_eq!(outcome, ExitOutcome::Success);
        assert!(output.contains(INPUT_SKIPPED));
        assert!(!output.contains("Hello, ignored"));
        assert_eq!(progress_lines(&output).len(), WORK_STEPS);
    }

    #[test]
    fn test_interrupted_before_start() {
        let interrupt = Interrupt::new();
        interrupt.raise();
        let (outcome, output) = run_with(quick_config(), interrupt, StdinMode::NonInteractive);

        assert_eq!(outcome, ExitOutcome::InterruptedByUser);
        assert!(output.contains(FAREWELL));
        assert!(!output.contains(BANNER));
        assert!(progress_lines(&output).is_empty());
    }

    #[test]
    fn test_interrupted_during_work() {
        let interrupt = Interrupt::new();
        let remote = interrupt.clone();
        let config = RunConfig {
            step_delay: Duration::from_millis(300),
            log_json: false,
        };

        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(450));
            remote.raise();
        });
        let (outcome, output) = run_with(config, interrupt, StdinMode::NonInteractive);
        handle.join().unwrap();

        assert_eq!(outcome, ExitOutcome::InterruptedByUser);
        assert_eq!(progress_lines(&output), vec!["  Processing step 1/3..."]);
        assert!(output.trim_end().ends_with(FAREWELL));
        assert!(!output.contains(SUCCESS_BANNER));
    }

    /// Buffers output and raises the interrupt once `trigger` is written
    struct RaiseOnWrite {
        buf: Vec<u8>,
        interrupt: Interrupt,
        trigger: &'static str,
    }

    impl Write for RaiseOnWrite {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.buf.extend_from_slice(buf);
            if String::from_utf8_lossy(&self.buf).contains(self.trigger) {
                self.interrupt.raise();
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_interrupt_before_read_is_global() {
        let interrupt = Interrupt::new();
        let out = RaiseOnWrite {
            buf: Vec::new(),
            interrupt: interrupt.clone(),
            trigger: INTERACTIVE_BANNER,
        };
        let mut runner = DemoRunner::new(
            out,
            quick_config(),
            interrupt,
            arguments(&[]),
            interactive(vec![PromptOutcome::Line("Ferris".into())]),
        );

        assert_eq!(runner.execute(), ExitOutcome::InterruptedByUser);
        let output = String::from_utf8(runner.into_inner().buf).unwrap();
        assert!(output.contains(INTERACTIVE_BANNER));
        assert!(output.contains(FAREWELL));
        assert!(!output.contains(INPUT_SKIPPED));
        assert!(!output.contains("Hello, Ferris"));
        assert!(progress_lines(&output).is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let mut runner = DemoRunner::new(
            BrokenPipe,
            quick_config(),
            Interrupt::new(),
            arguments(&["a"]),
            StdinMode::NonInteractive,
        );
        assert_eq!(runner.execute(), ExitOutcome::Failure);
    }

    #[test]
    fn test_arguments_echoed() {
        let mut runner = DemoRunner::new(
            Vec::new(),
            quick_config(),
            Interrupt::new(),
            arguments(&["a", "b"]),
            StdinMode::NonInteractive,
        );
        runner.run().unwrap();
        let output = String::from_utf8(runner.into_inner()).unwrap();

        assert!(output.contains(r#"Arguments: ["a", "b"]"#));
        assert!(!output.contains(NO_ARGUMENTS));
    }
}
