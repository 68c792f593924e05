//! Platform version handling and the wrapper-bundle selector.
//!
//! Versions follow the four-part `major.minor.patch[.QUALIFIER]` scheme used
//! by the target platform (e.g. `2.0.0.RELEASE`, `1.5.9.BUILD-SNAPSHOT`).
//! Ordering is total: the numeric triple dominates, the qualifier breaks ties.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// A parsed platform version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Option<String>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    /// Strict parse. Requires three numeric parts and at most one trailing
    /// qualifier (`2.1.0`, `2.0.0.RELEASE`).
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidVersion {
            input: input.to_string(),
        };

        let mut parts = input.splitn(4, '.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let patch = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let qualifier = match parts.next() {
            Some("") => return Err(invalid()),
            Some(q) => Some(q.to_string()),
            None => None,
        };

        Ok(Self {
            major,
            minor,
            patch,
            qualifier,
        })
    }

    /// Lenient parse: unparseable input degrades to `0.0.0` so a malformed
    /// version selects the legacy wrapper bundle instead of failing the run.
    pub fn safe_parse(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|_| Self::new(0, 0, 0))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| {
                compare_qualifiers(self.qualifier.as_deref(), other.qualifier.as_deref())
            })
    }
}

/// Rank of the qualifier class. A bare numeric version counts as a release.
fn qualifier_rank(qualifier: Option<&str>) -> u8 {
    match qualifier {
        Some(q) if q.starts_with('M') => 0,
        Some(q) if q.starts_with("RC") => 1,
        Some("BUILD-SNAPSHOT") => 2,
        _ => 3,
    }
}

/// Total order on qualifiers: class rank, then the numeric milestone/RC
/// suffix (`M4 < M10`), then the raw text. The final text comparison keeps
/// `Ord` consistent with `Eq`.
fn compare_qualifiers(a: Option<&str>, b: Option<&str>) -> Ordering {
    qualifier_rank(a)
        .cmp(&qualifier_rank(b))
        .then_with(|| qualifier_number(a).cmp(&qualifier_number(b)))
        .then_with(|| a.cmp(&b))
}

/// Trailing number of a qualifier (`M10` -> 10, `RC1` -> 1).
fn qualifier_number(qualifier: Option<&str>) -> Option<u32> {
    let digits = qualifier?.trim_start_matches(|c: char| !c.is_ascii_digit());
    digits.parse().ok()
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(q) = &self.qualifier {
            write!(f, ".{}", q)?;
        }
        Ok(())
    }
}

/// Minimum platform version shipping the modern Gradle wrapper bundle.
const MODERN_WRAPPER_THRESHOLD: Version = Version {
    major: 2,
    minor: 0,
    patch: 0,
    qualifier: None,
};

/// The two Gradle wrapper bundle variants shipped in the resource store.
///
/// Selection is a structural branch, not a continuum: exactly two variants
/// exist and the threshold is inclusive on the modern side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradleWrapperBundle {
    /// Wrapper bundle for platforms older than 2.0.0.
    Legacy,
    /// Wrapper bundle for platforms at or above 2.0.0.
    Modern,
}

impl GradleWrapperBundle {
    /// Select the bundle for a platform version.
    pub fn select(version: &Version) -> Self {
        if *version >= MODERN_WRAPPER_THRESHOLD {
            Self::Modern
        } else {
            Self::Legacy
        }
    }

    /// Logical resource-store prefix the bundle's files live under.
    pub fn resource_prefix(&self) -> &'static str {
        match self {
            Self::Legacy => "gradle3",
            Self::Modern => "gradle4",
        }
    }
}
