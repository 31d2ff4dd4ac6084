//! Reading and comparing agent configurations during a format migration.

pub mod config;
pub mod observability;

pub use config::{are_equal, load_new_config, load_old_config, ConfigError, NewConfig, OldConfig};
