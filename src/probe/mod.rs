//! Read-only probes of the runtime and its surroundings

pub mod arguments;
pub mod container;
pub mod environment;
pub mod files;
pub mod numbers;
pub mod runtime;

pub use arguments::ArgumentReport;
pub use container::{query_container, ContainerInfo};
pub use environment::{EnvironmentSnapshot, RECOGNIZED_VARS};
pub use files::{list_directory, DirectoryListing};
pub use numbers::NumberSample;
pub use runtime::{query_runtime, RuntimeInfo};
