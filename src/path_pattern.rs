use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

pub(crate) const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
pub(crate) const MAX_PATTERN_LENGTH: usize = 50_000;

/// Errors raised while compiling a path or origin pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern must not be empty")]
    Empty,
    #[error("failed to compile pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

pub(crate) fn compile_guarded(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

/// Path scope a policy applies to, in the `/api/**` glob style: `**` spans
/// any number of segments, `*` a single segment. Requests outside the scope
/// are untouched by the policy.
#[derive(Clone)]
pub struct PathPattern {
    raw: String,
    regex: Regex,
}

impl PathPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(PatternError::Empty);
        }

        let regex = compile_guarded(&Self::translate(trimmed), PATTERN_COMPILE_BUDGET)?;
        Ok(Self {
            raw: trimmed.to_string(),
            regex,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Translates the glob into an anchored regex. A trailing `/**` also
    /// matches the bare prefix itself, so `/api/**` covers `/api`.
    fn translate(pattern: &str) -> String {
        let (body, descend) = match pattern.strip_suffix("/**") {
            Some(prefix) if !prefix.is_empty() => (prefix, true),
            _ => (pattern, false),
        };

        let mut regex = String::with_capacity(pattern.len() + 8);
        regex.push('^');

        let mut rest = body;
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix("**") {
                regex.push_str(".*");
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix('*') {
                regex.push_str("[^/]*");
                rest = tail;
            } else {
                let ch = rest.chars().next().unwrap_or_default();
                if ch.is_ascii_punctuation() {
                    regex.push('\\');
                }
                regex.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }

        if descend {
            regex.push_str("(/.*)?");
        }
        regex.push('$');
        regex
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.raw).finish()
    }
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
