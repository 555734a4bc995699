//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the API state registry and
//! the HTTP error envelope every slice answers with.
//!
//! ## Config loading
//! ```rust,no_run
//! use lectio_kernel::config::load_config;
//! use lectio_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use lectio_domain as domain;
