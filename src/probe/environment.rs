//! Snapshot of the environment variables the demo recognizes

/// Recognized names, in display order
pub const RECOGNIZED_VARS: [&str; 6] = [
    "RUST_LOG",
    "RUST_BACKTRACE",
    "RUST_LIB_BACKTRACE",
    "PATH",
    "HOME",
    "USER",
];

pub const NOT_SET: &str = "Not set";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub entries: Vec<(String, String)>,
}

impl EnvironmentSnapshot {
    /// Capture the recognized variables from the process environment.
    /// Non-Unicode values are shown lossily, never as "Not set".
    pub fn capture() -> Self {
        Self::from_lookup(|name| {
            std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Capture through an arbitrary lookup; `None` reads as "Not set"
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let entries = RECOGNIZED_VARS
            .iter()
            .map(|name| {
                let value = lookup(name).unwrap_or_else(|| NOT_SET.to_string());
                (name.to_string(), value)
            })
            .collect();

        Self { entries }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
