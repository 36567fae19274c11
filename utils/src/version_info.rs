//! Version information for the application, populated at build time.
//!
//! Display format:
//! - release builds: `stable:{version}`
//! - debug builds: `dev:{commit}`

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the environment label and version/info string for this build.
pub fn env_version_info() -> (&'static str, &'static str) {
    if cfg!(debug_assertions) {
        ("dev", build_commit())
    } else {
        ("stable", build_version())
    }
}

/// Format the environment and version info as a display string.
pub fn format_env_version() -> String {
    let (env_name, info) = env_version_info();
    format!("{env_name}:{info}")
}
