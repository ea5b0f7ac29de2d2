//! Container context: clock, working directory, user and process ids

use std::path::PathBuf;

use crate::error::Result;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct ContainerInfo {
    pub timestamp: String,
    pub working_dir: PathBuf,
    /// `None` where the platform has no numeric user id
    pub uid: Option<u32>,
    pub pid: u32,
}

pub fn query_container() -> Result<ContainerInfo> {
    Ok(ContainerInfo {
        timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        working_dir: std::env::current_dir()?,
        uid: effective_uid(),
        pid: std::process::id(),
    })
}

#[cfg(unix)]
fn effective_uid() -> Option<u32> {
    // SAFETY: geteuid has no preconditions and cannot fail
    Some(unsafe { libc::geteuid() })
}

#[cfg(not(unix))]
fn effective_uid() -> Option<u32> {
    None
}
