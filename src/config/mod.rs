/// Default configuration template and file creation.
pub mod default;

/// Configuration error types.
pub mod error;

/// Configuration file loader.
pub mod loader;

/// TOML configuration schema types.
pub mod schema;

/// Validated runtime settings built from the file, the CLI, and the environment.
pub mod settings;

/// XDG Base Directory path resolution utilities.
pub mod xdg;

pub use error::ConfigError;
pub use schema::Config;
pub use settings::{Overrides, PageSettings, Settings};
