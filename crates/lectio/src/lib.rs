//! Facade crate for Lectio features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and implements no lookup logic.

pub use lectio_bible as bible;
pub use lectio_domain as domain;
use lectio_domain::config::ApiConfig;
pub use lectio_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use lectio_bible::server::router as bible_router;
        pub use lectio_kernel::server::router::system_router;
    }
}

/// Initializes every feature slice.
///
/// # Errors
/// Returns an error if any slice fails to initialize.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![bible::init(config)?];
    Ok(slices)
}
