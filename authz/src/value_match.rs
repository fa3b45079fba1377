use std::fmt;

/// Matches one request attribute either unconditionally or exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueMatch {
    /// Matches any value.
    Any,

    /// Matches exactly one value.
    Exact(String),
}

// === impl ValueMatch ===

impl ValueMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == actual,
        }
    }
}

/// An empty configuration value leaves the attribute unconstrained.
impl From<String> for ValueMatch {
    fn from(configured: String) -> Self {
        if configured.is_empty() {
            Self::Any
        } else {
            Self::Exact(configured)
        }
    }
}

impl fmt::Display for ValueMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(value) => value.fmt(f),
        }
    }
}
