//! Configuration for the wavamp player.
//!
//! Settings live in a single `config.toml` in the user config directory
//! (see [`paths`]). Every field has a default, so a missing file or a
//! partial one is fine; values are range-checked on load.
//!
//! ```rust,no_run
//! use wavamp_config::{AmpConfig, config_file_path};
//!
//! let config = AmpConfig::load_or_default(config_file_path()).unwrap();
//! let settings = config.player_settings();
//! println!("{:?}", settings.mode);
//! ```

mod config;
mod error;

/// Platform-specific configuration paths.
pub mod paths;

/// Range checks for configuration values.
pub mod validation;

pub use config::{AmpConfig, AudioConfig, PlayerConfig, WindowConfig};
pub use error::ConfigError;
pub use paths::{config_file_path, user_config_dir};
pub use validation::{ValidationError, ValidationResult, validate_config};
