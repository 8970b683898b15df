//! Version constraints: `>=`, `<=`, `>`, `<`, `=`, `^`, `~` and bare versions.
//!
//! A constraint is a single operator followed by a target version. It is
//! evaluated by turning it into an [`Interval`] and checking membership.
//!
//! | expression | interval                              |
//! |------------|---------------------------------------|
//! | `>=1.2.3`  | `[1.2.3, ∞)`                          |
//! | `<=1.2.3`  | `(-∞, 1.2.3]`                         |
//! | `>1.2.3`   | `(1.2.3, ∞)`                          |
//! | `<1.2.3`   | `(-∞, 1.2.3)`                         |
//! | `=1.2.3`   | `[1.2.3, 1.2.3]`                      |
//! | `1.2.3`    | `[1.2.3, 1.2.3]`                      |
//! | `^1.2.3`   | `[1.2.3, 2.0.0)`                      |
//! | `~1.2.3`   | `[1.2.3, 1.3.0)`                      |
//!
//! Combined ranges such as `>=1.0 <2.0` are not supported: the whole
//! remainder after the operator is read as one (lenient) version.

use std::fmt;
use std::str::FromStr;

use crate::domain::version::Version;

/// Operator of a constraint expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator at all: `1.2.3` means exactly `1.2.3`.
    Bare,
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
    Caret,
    Tilde,
}

impl Operator {
    /// Prefix match order. Two-character operators come first so `>=` is
    /// never read as `>` followed by `=1.2.3`.
    const PREFIXES: [(&'static str, Operator); 7] = [
        (">=", Operator::Ge),
        ("<=", Operator::Le),
        (">", Operator::Gt),
        ("<", Operator::Lt),
        ("=", Operator::Eq),
        ("^", Operator::Caret),
        ("~", Operator::Tilde),
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bare => "",
            Self::Eq => "=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Caret => "^",
            Self::Tilde => "~",
        }
    }

    /// Split a constraint string into its operator and the remaining text.
    fn split(input: &str) -> (Self, &str) {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, op)| input.strip_prefix(prefix).map(|rest| (*op, rest)))
            .unwrap_or((Self::Bare, input))
    }
}

/// One side of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub version: Version,
    pub inclusive: bool,
}

impl Bound {
    pub const fn inclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: true,
        }
    }

    pub const fn exclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: false,
        }
    }
}

/// Evaluation form of a constraint. An absent bound is unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Interval {
    /// Interval with no restriction on either side.
    pub const fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = self.lower.is_none_or(|b| {
            if b.inclusive {
                *version >= b.version
            } else {
                *version > b.version
            }
        });
        let below_upper = self.upper.is_none_or(|b| {
            if b.inclusive {
                *version <= b.version
            } else {
                *version < b.version
            }
        });
        above_lower && below_upper
    }
}

/// A parsed constraint expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The empty constraint; every version satisfies it.
    Any,
    /// An operator applied to a target version.
    Expr { op: Operator, target: Version },
}

impl Constraint {
    /// Parse a constraint. Never fails: the empty string is [`Constraint::Any`]
    /// and the target is parsed leniently.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::Any;
        }
        let (op, rest) = Operator::split(input);
        Self::Expr {
            op,
            target: Version::parse(rest.trim()),
        }
    }

    pub fn interval(&self) -> Interval {
        let Self::Expr { op, target } = *self else {
            return Interval::unbounded();
        };

        match op {
            Operator::Ge => Interval {
                lower: Some(Bound::inclusive(target)),
                upper: None,
            },
            Operator::Le => Interval {
                lower: None,
                upper: Some(Bound::inclusive(target)),
            },
            Operator::Gt => Interval {
                lower: Some(Bound::exclusive(target)),
                upper: None,
            },
            Operator::Lt => Interval {
                lower: None,
                upper: Some(Bound::exclusive(target)),
            },
            Operator::Eq | Operator::Bare => Interval {
                lower: Some(Bound::inclusive(target)),
                upper: Some(Bound::inclusive(target)),
            },
            // Any minor/patch upgrade within the same major.
            Operator::Caret => Interval {
                lower: Some(Bound::inclusive(target)),
                upper: next_major(target).map(Bound::exclusive),
            },
            // Patch-level upgrades within the same minor.
            Operator::Tilde => Interval {
                lower: Some(Bound::inclusive(target)),
                upper: target
                    .minor
                    .checked_add(1)
                    .map(|minor| Version::new(target.major, minor, 0))
                    .or_else(|| next_major(target))
                    .map(Bound::exclusive),
            },
        }
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.interval().contains(version)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::Any
    }
}

impl FromStr for Constraint {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Expr { op, target } => write!(f, "{}{}", op.as_str(), target),
        }
    }
}

/// `(major + 1).0.0`, or `None` when the major component is already at its
/// maximum and the range has no upper end.
fn next_major(target: Version) -> Option<Version> {
    target
        .major
        .checked_add(1)
        .map(|major| Version::new(major, 0, 0))
}

/// Whether `version` satisfies `constraint`. An empty constraint always does.
pub fn satisfies(version: &str, constraint: &str) -> bool {
    Constraint::parse(constraint).matches(&Version::parse(version))
}
