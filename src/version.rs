//! Dotted `major.minor.patch` product versions.

use std::fmt;

/// Separator between version components.
pub const VERSION_SEPARATOR: char = '.';

/// A product version split into numeric components.
///
/// A component is `None` when it was absent or not a number; callers decide
/// what that means (a missing patch, for instance, marks a preview build).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedVersion {
    /// Major version.
    pub major: Option<i64>,
    /// Minor version.
    pub minor: Option<i64>,
    /// Patch level.
    pub patch: Option<i64>,
}

/// Parse up to three dotted components. Never fails.
pub fn parse_version(version: &str) -> ParsedVersion {
    let mut components = version.split(VERSION_SEPARATOR).map(parse_component);

    ParsedVersion {
        major: components.next().flatten(),
        minor: components.next().flatten(),
        patch: components.next().flatten(),
    }
}

fn parse_component(component: &str) -> Option<i64> {
    component.trim().parse().ok()
}

impl ParsedVersion {
    /// A build is a preview until its patch level reaches `rtm_min_patch_version`.
    pub fn is_preview(&self, rtm_min_patch_version: i64) -> bool {
        self.patch.map_or(true, |patch| patch < rtm_min_patch_version)
    }

    /// The release line immediately before this one, keeping the patch.
    ///
    /// `X.1` steps back to `(X-1).max_minor_version`; any other minor steps
    /// back by one within the same major. Missing components stay missing.
    pub fn previous_release(&self, max_minor_version: i64) -> ParsedVersion {
        if self.minor == Some(1) {
            ParsedVersion {
                major: self.major.and_then(|major| major.checked_sub(1)),
                minor: Some(max_minor_version),
                patch: self.patch,
            }
        } else {
            ParsedVersion {
                major: self.major,
                minor: self.minor.and_then(|minor| minor.checked_sub(1)),
                patch: self.patch,
            }
        }
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let component = |value: Option<i64>| value.map_or_else(|| "NaN".to_string(), |v| v.to_string());
        write!(
            f,
            "{}.{}.{}",
            component(self.major),
            component(self.minor),
            component(self.patch)
        )
    }
}
