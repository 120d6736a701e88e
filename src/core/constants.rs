//! Constants used throughout groundwork.
//!
//! Centralizes magic strings and configuration values.

/// Backend environment file name, written into the project root.
pub const ENV_BACKEND_FILE: &str = ".env";

/// Frontend environment file name, written into the project root.
pub const ENV_FRONTEND_FILE: &str = ".env.frontend";

/// Default generation context file name (relative to the project root).
pub const CONTEXT_FILE: &str = "scaffold.json";

/// Base URL the frontend uses to reach the backend inside the compose network.
pub const API_URL: &str = "http://api:8000";

/// Default database host (compose service name).
pub const DB_HOST: &str = "db";

/// Default database port.
pub const DB_PORT: u16 = 5432;

/// Inclusive lower bound of the OIDC client identifier range.
pub const CLIENT_ID_MIN: u32 = 100_000;

/// Inclusive upper bound of the OIDC client identifier range.
pub const CLIENT_ID_MAX: u32 = 999_999;
