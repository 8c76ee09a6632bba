//! Configuration file loading for chatline
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHATLINE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatline.toml` or `./.chatline.toml`
//! 4. Global config: `<config dir>/chatline/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top of the loaded result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig, FileResponderConfig,
    FileSessionConfig, expand_home,
};
pub use loader::ConfigLoader;
