//! Runtime identity: which binary is running, and on what

use std::path::PathBuf;
use sysinfo::System;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub version: String,
    pub executable: PathBuf,
    pub platform: &'static str,
    pub arch: &'static str,
    pub os_name: String,
}

pub fn query_runtime() -> Result<RuntimeInfo> {
    Ok(RuntimeInfo {
        version: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        executable: std::env::current_exe()?,
        platform: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        os_name: System::long_os_version().unwrap_or_else(|| "Unknown".to_string()),
    })
}
