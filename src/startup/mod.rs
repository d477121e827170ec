//! Startup configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`Config`] builder and environment overrides
//! - [`logging`] - Log file subscriber
//!
//! # Usage
//!
//! ```ignore
//! use folio::startup::{init_logging, Config};
//!
//! let config = Config::from_env();
//! let _log_path = init_logging(&config);
//! ```

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::init_logging;
