//! Shared string constants: `OpenAPI` tags, request defaults, environment prefixes.

/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for scripture lookups.
pub const BIBLE_TAG: &str = "Bible";

/// Chapter used when the `chapter` query parameter is absent.
pub const DEFAULT_CHAPTER: &str = "1";
/// Verse selector used when the `verses` query parameter is absent ("whole chapter").
pub const ALL_VERSES: &str = "-1";
/// Translation used when the `version` query parameter is absent.
pub const DEFAULT_VERSION: &str = "KJV";

/// Prefix for environment overrides (`LECTIO__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "LECTIO";
/// Default configuration file stem, resolved as `server.toml`.
pub const CONFIG_FILE: &str = "server";
