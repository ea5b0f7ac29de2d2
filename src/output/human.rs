//! Human-readable output
//!
//! Every section is rendered to a `String` so the runner stays a plain
//! sequence of writes and the wording can be checked in isolation.

use crate::probe::{
    ArgumentReport, ContainerInfo, DirectoryListing, EnvironmentSnapshot, NumberSample,
    RuntimeInfo,
};

pub const BANNER: &str = "🦀 Rust Docker Hello World! 🐳";
pub const NO_ARGUMENTS: &str = "No additional arguments provided";
pub const PERMISSION_DENIED: &str = "Permission denied accessing current directory";
pub const INTERACTIVE_BANNER: &str = "🎯 Interactive Mode Detected!";
pub const NAME_PROMPT: &str = "Enter your name (or press Enter to skip): ";
pub const INPUT_SKIPPED: &str = "Input skipped.";
pub const NON_INTERACTIVE: &str = "🤖 Running in non-interactive mode";
pub const WORK_BANNER: &str = "⏳ Simulating work...";
pub const SUCCESS_BANNER: &str = "✅ Rust Docker container executed successfully!";
pub const FAREWELL: &str = "👋 Goodbye! Container interrupted by user.";

pub const KEY_CONCEPTS: [&str; 6] = [
    "Rust binary in Docker",
    "Environment variable handling",
    "File system operations",
    "User permissions and security",
    "Interactive vs non-interactive execution",
    "Basic Rust application structure",
];

pub fn format_banner() -> String {
    format!("{}\n{}", BANNER, "=".repeat(50))
}

pub fn format_runtime(info: &RuntimeInfo) -> String {
    format!(
        "Version: {}\n\
         Executable: {}\n\
         Platform: {}\n\
         Architecture: {}\n\
         Operating System: {}",
        info.version,
        info.executable.display(),
        info.platform,
        info.arch,
        info.os_name
    )
}

pub fn format_container(info: &ContainerInfo) -> String {
    let uid = info
        .uid
        .map(|u| u.to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    format!(
        "\n🐳 Container Information:\n\
         Current Time: {}\n\
         Working Directory: {}\n\
         User ID: {}\n\
         Process ID: {}",
        info.timestamp,
        info.working_dir.display(),
        uid,
        info.pid
    )
}

pub fn format_environment(snapshot: &EnvironmentSnapshot) -> String {
    let mut output = String::from("\n🔧 Environment Variables:");
    for (name, value) in &snapshot.entries {
        output.push_str(&format!("\n  {}: {}", name, value));
    }
    output
}

pub fn format_file_check_header() -> String {
    "\n📁 File System Check:".to_string()
}

pub fn format_listing(listing: &DirectoryListing) -> String {
    match listing {
        DirectoryListing::Entries(names) => format!("Files in current directory: {:?}", names),
        DirectoryListing::PermissionDenied => PERMISSION_DENIED.to_string(),
    }
}

pub fn format_computation(sample: &NumberSample) -> String {
    format!(
        "\n🧮 Simple Computation:\n\
         Numbers: {:?}\n\
         Sum: {}\n\
         Average: {:?}",
        sample.values(),
        sample.sum(),
        sample.average()
    )
}

pub fn format_arguments(report: &ArgumentReport) -> String {
    let mut output = format!(
        "\n📋 Command Line Arguments:\nProgram name: {}\n",
        report.program
    );
    if report.extra.is_empty() {
        output.push_str(NO_ARGUMENTS);
    } else {
        output.push_str(&format!("Arguments: {:?}", report.extra));
    }
    output
}

pub fn format_greeting(name: &str) -> String {
    format!("Hello, {}! Welcome to Docker with Rust! 🎉", name)
}

pub fn format_progress(step: usize, total: usize) -> String {
    format!("  Processing step {}/{}...", step, total)
}

pub fn format_recap() -> String {
    let mut output = format!("\n{}\n🎓 Key concepts demonstrated:", SUCCESS_BANNER);
    for concept in KEY_CONCEPTS {
        output.push_str(&format!("\n  - {}", concept));
    }
    output
}

pub fn format_error(error: &dyn std::fmt::Display) -> String {
    format!("\n❌ Error: {}", error)
}

pub fn format_farewell() -> String {
    format!("\n\n{}", FAREWELL)
}
