use crate::path_pattern::{PATTERN_COMPILE_BUDGET, PatternError, compile_guarded};
use regex_automata::meta::Regex;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Allowed-origin configuration. Exact entries compare case-sensitively and
/// never expand subdomains; patterns are for callers who explicitly opt into
/// them.
#[derive(Clone, Default)]
pub enum Origin {
    /// Wildcard: emits `*`. Forbidden together with credentials.
    #[default]
    Any,
    Exact(String),
    List(Vec<OriginMatcher>),
}

/// Outcome of resolving a request origin against the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Exact(String),
    Mirror,
    Disallow,
    Skip,
}

#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compiles `pattern` case-insensitively, with the same length and
    /// compile-time guards as [`crate::PathPattern`].
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_guarded(&format!("(?i:{pattern})"), PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        if let Some(origin) = request_origin
            && origin.len() > MAX_ORIGIN_LENGTH
        {
            return OriginDecision::Disallow;
        }

        match self {
            Origin::Any => match request_origin {
                Some(_) => OriginDecision::Any,
                None => OriginDecision::Skip,
            },
            Origin::Exact(value) => match request_origin {
                Some(origin) if value == origin => OriginDecision::Exact(value.clone()),
                Some(_) => OriginDecision::Disallow,
                None => OriginDecision::Skip,
            },
            Origin::List(matchers) => {
                if let Some(origin) = request_origin {
                    if matchers.iter().any(|matcher| matcher.matches(origin)) {
                        OriginDecision::Mirror
                    } else {
                        OriginDecision::Disallow
                    }
                } else {
                    OriginDecision::Skip
                }
            }
        }
    }

    /// Whether a disallowed origin should still emit `Vary: Origin`.
    pub fn vary_on_disallow(&self) -> bool {
        !matches!(self, Origin::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
