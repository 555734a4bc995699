//! Common imports for feature slices.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use lectio_domain::config::ApiConfig;
pub use lectio_domain::registry::{FeatureSlice, InitializedSlice};
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ApiStateError};
