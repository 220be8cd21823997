use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::normalized_request::NormalizedRequest;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, PreflightResult, SimpleRejection,
    SimpleRejectionReason, SimpleResult,
};
use tracing::debug;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Construction validates the configuration; evaluation is a pure function
/// over the request with no interior mutability, so a `Cors` can be shared
/// across any number of request handlers without synchronization.
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.options.path_pattern.matches(request.path) {
            return CorsDecision::NotApplicable;
        }

        // No Origin header means same-origin or non-browser traffic; that is
        // not a failure, the policy simply does not apply.
        if request.origin.is_none_or(|origin| origin.is_empty()) {
            return CorsDecision::NotApplicable;
        }

        let normalized = NormalizedRequest::new(request);
        if normalized.is_preflight() {
            self.check_preflight(request, &normalized)
        } else {
            self.check_simple(request)
        }
    }

    fn check_preflight(
        &self,
        request: &RequestContext<'_>,
        normalized: &NormalizedRequest<'_>,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);

        let origin_headers = match builder.build_origin_headers(request) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow(headers) => {
                debug!(
                    origin = request.origin.unwrap_or_default(),
                    "preflight rejected: origin not allowed"
                );
                return CorsDecision::PreflightRejected(PreflightRejection {
                    reason: PreflightRejectionReason::OriginNotAllowed,
                    headers: headers.into_headers(),
                    status: self.options.preflight_rejection_status,
                });
            }
            OriginOutcome::Allow(headers) => headers,
        };

        let requested_method = normalized.access_control_request_method();
        if !self.options.methods.allows(requested_method) {
            debug!(requested_method, "preflight rejected: method not allowed");
            return CorsDecision::PreflightRejected(PreflightRejection {
                reason: PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
                headers: builder.build_rejection_headers().into_headers(),
                status: self.options.preflight_rejection_status,
            });
        }

        let requested_headers = normalized.access_control_request_headers();
        if !self.options.allowed_headers.allows_headers(requested_headers) {
            debug!(requested_headers, "preflight rejected: headers not allowed");
            return CorsDecision::PreflightRejected(PreflightRejection {
                reason: PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: requested_headers.to_string(),
                },
                headers: builder.build_rejection_headers().into_headers(),
                status: self.options.preflight_rejection_status,
            });
        }

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());

        CorsDecision::PreflightAccepted(PreflightResult {
            headers: headers.into_headers(),
            status: self.options.preflight_success_status,
        })
    }

    fn check_simple(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);

        let origin_headers = match builder.build_origin_headers(request) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow(headers) => {
                debug!(
                    origin = request.origin.unwrap_or_default(),
                    "simple request origin not allowed; response stays opaque to the browser"
                );
                return CorsDecision::SimpleRejected(SimpleRejection {
                    reason: SimpleRejectionReason::OriginNotAllowed,
                    headers: headers.into_headers(),
                });
            }
            OriginOutcome::Allow(headers) => headers,
        };

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::SimpleAccepted(SimpleResult {
            headers: headers.into_headers(),
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
