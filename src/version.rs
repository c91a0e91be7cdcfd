//! Portainer server version gate.
//!
//! The backend reports its version at startup; servers outside the supported
//! range are rejected before any tool is registered. The lower bound is a full
//! semantic-version comparison, the upper bound compares major.minor only so
//! every patch release of the newest supported minor is accepted.

use semver::Version;

use crate::error::PortainerMcpError;

/// Minimum version of Portainer supported by this server
pub const MIN_SUPPORTED_PORTAINER_VERSION: &str = "2.27.0";

/// Maximum version (major.minor) of Portainer supported by this server
pub const MAX_SUPPORTED_PORTAINER_VERSION: &str = "2.36";

/// Parse `[v]MAJOR[.MINOR[.PATCH]][-pre][+build]`.
///
/// Missing minor/patch components are zero. The short forms cannot carry a
/// pre-release or build suffix.
pub fn parse_version(input: &str) -> Option<Version> {
    let s = input.strip_prefix('v').unwrap_or(input);
    let core_end = s.find(['-', '+']).unwrap_or(s.len());
    let (core, suffix) = s.split_at(core_end);

    let normalised = match core.split('.').count() {
        1 if suffix.is_empty() => format!("{}.0.0", core),
        2 if suffix.is_empty() => format!("{}.0", core),
        3 => s.to_string(),
        _ => return None,
    };
    Version::parse(&normalised).ok()
}

/// Validate that `version` falls within
/// [`MIN_SUPPORTED_PORTAINER_VERSION`, `MAX_SUPPORTED_PORTAINER_VERSION`].
pub fn check_portainer_version(version: &str) -> crate::Result<()> {
    let v = parse_version(version)
        .ok_or_else(|| PortainerMcpError::InvalidVersion(version.to_string()))?;
    let min = parse_version(MIN_SUPPORTED_PORTAINER_VERSION)
        .ok_or_else(|| PortainerMcpError::InvalidVersion(MIN_SUPPORTED_PORTAINER_VERSION.into()))?;
    let max = parse_version(MAX_SUPPORTED_PORTAINER_VERSION)
        .ok_or_else(|| PortainerMcpError::InvalidVersion(MAX_SUPPORTED_PORTAINER_VERSION.into()))?;

    if v < min {
        return Err(PortainerMcpError::UnsupportedVersion {
            version: version.to_string(),
            bound: "minimum",
            limit: MIN_SUPPORTED_PORTAINER_VERSION,
        });
    }

    if (v.major, v.minor) > (max.major, max.minor) {
        return Err(PortainerMcpError::UnsupportedVersion {
            version: version.to_string(),
            bound: "maximum",
            limit: MAX_SUPPORTED_PORTAINER_VERSION,
        });
    }

    Ok(())
}
