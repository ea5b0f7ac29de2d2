//! Error types for container-hello

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Process-wide Ctrl+C outside the interactive read
    #[error("Interrupted by user")]
    Interrupted,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Prompt(String),

    #[error("Argument error: {0}")]
    Args(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;
