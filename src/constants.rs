//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and endpoint defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userview";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("userview/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.userview.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userview.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userview";

// ── Endpoint defaults ───────────────────────────────────────────────

/// Server the resource paths are resolved against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// User resource template. Querying it without an id targets `rest/user`.
pub const DEFAULT_USER_TEMPLATE: &str = "rest/user/:id";

/// User fetched by the list-and-detail controller in `demo` mode.
pub const DEMO_USER_ID: i64 = 1;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERVIEW_BASE_URL";
pub const ENV_TEMPLATE: &str = "USERVIEW_TEMPLATE";
pub const ENV_LOG: &str = "USERVIEW_LOG";
pub const ENV_LOG_FORMAT: &str = "USERVIEW_LOG_FORMAT";
