//! Host platform detection and fixed filesystem locations.

use std::path::PathBuf;

/// Fixed location of Apple's `airport` utility. It is not on `PATH`.
pub const AIRPORT_PATH: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";

/// Returns the host operating system identifier.
///
/// Uses kernel names: `darwin` on macOS, `windows` on Windows. Other
/// systems report their Rust target OS name (`linux`, `freebsd`, ...),
/// none of which has a scan pipeline.
pub fn host_platform_id() -> &'static str {
    platform_id_for(std::env::consts::OS)
}

fn platform_id_for(target_os: &'static str) -> &'static str {
    match target_os {
        "macos" => "darwin",
        other => other,
    }
}

/// Returns the configuration directory for wifiscan.
///
/// Platform-specific locations:
/// - Linux: `~/.config/wifiscan/`
/// - macOS: `~/Library/Application Support/wifiscan/`
/// - Windows: `%APPDATA%\wifiscan\`
///
/// Falls back to `./wifiscan/` if no config directory can be determined.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wifiscan")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_id_for() {
        assert_eq!(platform_id_for("macos"), "darwin");
        assert_eq!(platform_id_for("windows"), "windows");
        assert_eq!(platform_id_for("linux"), "linux");
    }

    #[test]
    fn test_config_dir_ends_with_crate_name() {
        assert!(config_dir().ends_with("wifiscan"));
    }
}
