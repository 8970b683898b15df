//! Lenient dotted-numeric versions.
//!
//! Registry data is hand-written by blueprint publishers, so parsing never
//! fails: a missing component is `0`, and so is anything that is not a
//! non-negative integer. `"v2.1"` is `2.1.0`, `"x.y.z"` is `0.0.0`.
//!
//! A stricter mode would reject those inputs, but existing registries rely
//! on the lenient behaviour and it stays the default.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A `(major, minor, patch)` triple ordered lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `[v]INT[.INT[.INT]]`. Never fails.
    ///
    /// Surrounding whitespace and a single leading `v` are stripped. The
    /// string is split into at most three parts; anything after the second
    /// dot belongs to the patch component (so `"1.2.3.4"` has patch
    /// `"3.4"`, which is non-numeric and becomes `0`).
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let s = s.strip_prefix('v').unwrap_or(s);

        let mut parts = s.splitn(3, '.').map(component);

        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }

    /// Three-way comparison: `-1`, `0` or `1`.
    pub fn compare(&self, other: &Self) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Next version for a bump kind. A component already at `u64::MAX`
    /// stays there.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Self::new(self.major.saturating_add(1), 0, 0),
            BumpKind::Minor => Self::new(self.major, self.minor.saturating_add(1), 0),
            BumpKind::Patch => Self::new(self.major, self.minor, self.patch.saturating_add(1)),
        }
    }
}

fn component(part: &str) -> u64 {
    part.parse().unwrap_or(0)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Which component a manifest bump increments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
