//! Observability subsystem.
//!
//! Load failures are reported as `tracing` events with `path` and `error`
//! fields; `logging.rs` decides where they end up.

pub mod logging;
