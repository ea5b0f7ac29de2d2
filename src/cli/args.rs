//! CLI argument capture
//!
//! The demo does not take options. clap only describes the command; every
//! argument after the program name is kept as given, `--` and non-UTF-8
//! values included, so it can be echoed back.

use clap::Parser;
use std::ffi::OsString;

use crate::error::{DemoError, Result};

#[derive(Parser, Debug)]
#[command(name = "container-hello")]
#[command(
    about = "Print runtime and container information",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Free-form arguments, echoed back and never interpreted
    #[arg(skip)]
    pub rest: Vec<OsString>,

    /// Argument zero as the process received it
    #[arg(skip)]
    pub program: String,
}

impl Args {
    /// Parse from an explicit argv, argument zero included
    pub fn parse_argv<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program: Option<OsString> = argv.next();

        let mut args = Args::try_parse_from(program.iter())
            .map_err(|e| DemoError::Args(e.to_string()))?;
        args.program = program
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        args.rest = argv.collect();
        Ok(args)
    }

    /// Parse the current process's arguments
    pub fn from_env() -> Result<Self> {
        Self::parse_argv(std::env::args_os())
    }
}
