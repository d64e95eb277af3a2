pub mod cli;
pub mod config;
pub mod extract;
pub mod logging;
pub mod utils;
pub mod version;

/// Re-export commonly used items
pub use config::{ExtractorConfig, HEADER_FILE_NAME};
pub use extract::{extract_version, Component, ExtractionError, Version};
pub use version::VERSION;
