//! Configuration reading and comparison for the agent config migration.
//!
//! # Data Flow
//! ```text
//! config file (JSON, new or legacy format)
//!     → loader.rs (read & deserialize)
//!     → NewConfig / OldConfig (owned by the caller)
//!
//! two NewConfig values
//!     → compare.rs (deep equality, metrics section excluded)
//!     → bool
//! ```
//!
//! # Design Decisions
//! - Decoding is structural only; no semantic validation happens here
//! - I/O and decode failures share one message but stay distinct variants
//! - Comparison borrows its inputs and never mutates them

pub mod compare;
pub mod loader;
pub mod schema;

pub use compare::are_equal;
pub use loader::{load_new_config, load_old_config, ConfigError};
pub use schema::{MetricsSection, NewConfig, OldConfig};
