use crate::error::{Result, SweepError};

/// Platforms with known data sources for system scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    fn from_os(os: &str) -> Option<Platform> {
        match os {
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// Detect the running platform, or None when no scan data source exists.
    pub fn current() -> Option<Platform> {
        Self::from_os(std::env::consts::OS)
    }

    /// Detect the running platform, failing with context about the resource
    /// that needed it. Must be called before spawning any external command.
    pub fn detect(resource: &'static str) -> Result<Platform> {
        Self::detect_from(std::env::consts::OS, resource)
    }

    /// Detection seam with the OS name injected, so the unsupported arm is
    /// reachable from tests regardless of the host.
    pub(crate) fn detect_from(os: &str, resource: &'static str) -> Result<Platform> {
        Self::from_os(os).ok_or_else(|| SweepError::UnsupportedPlatform {
            resource,
            os: os.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_os_names_map_to_platforms() {
        assert_eq!(Platform::from_os("macos"), Some(Platform::MacOs));
        assert_eq!(Platform::from_os("linux"), Some(Platform::Linux));
    }

    #[test]
    fn unknown_os_has_no_platform() {
        assert_eq!(Platform::from_os("plan9"), None);
        assert_eq!(Platform::from_os("windows"), None);
        assert_eq!(Platform::from_os(""), None);
    }

    #[test]
    fn current_platform_is_known_in_ci() {
        // Test suites run on macOS or Linux
        assert!(Platform::current().is_some());
    }

    #[test]
    fn detection_failure_names_resource_and_os() {
        let err = Platform::detect_from("plan9", "memory").unwrap_err();
        assert!(matches!(err, SweepError::UnsupportedPlatform { .. }));
        assert!(err.to_string().contains("memory"));
        assert!(err.to_string().contains("plan9"));
    }
}
