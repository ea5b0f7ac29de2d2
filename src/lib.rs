//! container-hello - a hello-world binary for learning Docker
//!
//! Prints what the program can see from inside a container: its own
//! version and executable, the clock, working directory, user and process
//! ids, a handful of environment variables and the current directory's
//! entries. It then does a small computation, echoes its arguments,
//! optionally greets the user and simulates a few seconds of work.
//!
//! # Example
//!
//! ```no_run
//! use container_hello::{DemoRunner, Interrupt, RunConfig, StdinMode};
//! use container_hello::cli::Args;
//!
//! let args = Args::from_env().unwrap();
//! let mut runner = DemoRunner::new(
//!     std::io::stdout(),
//!     RunConfig::default(),
//!     Interrupt::new(),
//!     (&args).into(),
//!     StdinMode::NonInteractive,
//! );
//! std::process::exit(runner.execute().code());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod output;
pub mod probe;
pub mod prompt;
pub mod runner;

pub use config::RunConfig;
pub use error::{DemoError, Result};
pub use interrupt::Interrupt;
pub use prompt::{LineReader, PromptOutcome, TerminalReader};
pub use runner::{DemoRunner, ExitOutcome, StdinMode};
