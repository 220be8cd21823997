use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::path_pattern::PathPattern;
use crate::util::is_http_token;
use thiserror::Error;
use tracing::warn;

/// Immutable policy configuration. Built once at startup, validated by
/// [`crate::Cors::new`], and shared read-only for the process lifetime.
#[derive(Clone)]
pub struct CorsOptions {
    /// Path scope the policy applies to; requests outside it pass through
    /// untouched.
    pub path_pattern: PathPattern,
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds a browser may cache a preflight result.
    pub max_age: Option<u64>,
    pub preflight_success_status: u16,
    /// The CORS specification leaves the failed-preflight status open; 403
    /// is the conventional default.
    pub preflight_rejection_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            path_pattern: PathPattern::new("/api/**").expect("default path scope is valid"),
            origin: Origin::list(["http://localhost:5173", "http://localhost:3000"]),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::Any,
            exposed_headers: ExposedHeaders::default(),
            credentials: true,
            max_age: Some(3600),
            preflight_success_status: 204,
            preflight_rejection_status: 403,
        }
    }
}

/// Configuration errors, rejected eagerly so the process never serves
/// requests under an invalid policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allowing credentials requires specific origins; browsers reject the wildcard origin when credentials are enabled"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("the allowed-headers list cannot contain '*'; use AllowedHeaders::Any instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("the exposed-headers list cannot contain '*'")]
    ExposedHeadersCannotContainWildcard,
    #[error("'{0}' is not a valid HTTP method token")]
    InvalidMethodToken(String),
    #[error("'{0}' is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("preflight success status {0} must be in the 2xx class")]
    InvalidSuccessStatus(u16),
    #[error("preflight rejection status {0} must be in the 4xx class")]
    InvalidRejectionStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && matches!(self.origin, Origin::Any) {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let AllowedMethods::List(methods) = &self.methods {
            for method in methods {
                if !is_http_token(method) {
                    return Err(ValidationError::InvalidMethodToken(method.clone()));
                }
            }
        }

        if let AllowedHeaders::List(headers) = &self.allowed_headers {
            for header in headers {
                if header == "*" {
                    return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
                }
                if !is_http_token(header) {
                    return Err(ValidationError::InvalidHeaderName(header.clone()));
                }
            }
        }

        for header in self.exposed_headers.values() {
            if header == "*" {
                return Err(ValidationError::ExposedHeadersCannotContainWildcard);
            }
            if !is_http_token(header) {
                return Err(ValidationError::InvalidHeaderName(header.clone()));
            }
        }

        if !(200..=299).contains(&self.preflight_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.preflight_success_status,
            ));
        }
        if !(400..=499).contains(&self.preflight_rejection_status) {
            return Err(ValidationError::InvalidRejectionStatus(
                self.preflight_rejection_status,
            ));
        }

        if self.credentials && matches!(self.allowed_headers, AllowedHeaders::Any) {
            warn!(
                path_pattern = self.path_pattern.as_str(),
                "wildcard allowed-headers combined with credentials; preflight responses will echo the requested headers instead of '*'"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
