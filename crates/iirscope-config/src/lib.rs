//! Configuration for the iirscope toolchain.
//!
//! A single optional TOML file sets where filter test reports are read from
//! and which filters the export sweep runs. Missing keys fall back to the
//! defaults the filter test suites were written against.
//!
//! # Example
//!
//! ```rust
//! use iirscope_config::Config;
//!
//! let config = Config::from_toml(
//!     r#"
//!     [sweep]
//!     low_hz = 20.0
//!     high_hz = 40.0
//!     orders = [2, 4]
//!     "#,
//! )
//! .unwrap();
//!
//! let filters = config.sweep.filters(250.0).unwrap();
//! assert_eq!(filters.len(), 4 * 4 * 2);
//! ```

mod config;
mod error;

pub use config::{Config, DEFAULT_CONFIG_FILE, ResponseConfig, SweepConfig};
pub use error::ConfigError;
