// Adapters - External system implementations

pub mod exec_rsync;
pub mod fs_std;
pub mod prompt;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_rsync::RsyncAdapter;
pub use fs_std::StdFsAdapter;
pub use prompt::TerminalPromptAdapter;
pub use toml_config::{AppConfig, TomlConfigAdapter};
pub use tracing_log::{init_logging, LogLevel};
