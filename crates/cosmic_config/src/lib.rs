//! Runtime configuration for Cosmic Connections.
//!
//! Settings come from `COSMIC_*` environment variables, optionally seeded
//! from a `.env` file. Logging is set up once per process by
//! [`init_tracing`].

pub mod env;
pub mod error;
pub mod tracing_init;

pub use env::{CosmicConfig, ENV_LOG, ENV_MAX_AGE, ENV_MIN_AGE, ENV_SEED, ENV_UNKNOWN_SIGN};
pub use error::ConfigError;
pub use tracing_init::init_tracing;
