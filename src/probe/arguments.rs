//! Report of how the program was invoked

use crate::cli::Args;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentReport {
    pub program: String,
    pub extra: Vec<String>,
}

impl From<&Args> for ArgumentReport {
    fn from(args: &Args) -> Self {
        Self {
            program: args.program.clone(),
            extra: args
                .rest
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
        }
    }
}
