use crate::allowed_headers::AllowedHeaders;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

pub(crate) enum OriginOutcome {
    Allow(HeaderCollection),
    Disallow(HeaderCollection),
    Skip,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(&self, request: &RequestContext<'_>) -> OriginOutcome {
        let request_origin = request.origin.filter(|origin| !origin.is_empty());

        match self.options.origin.resolve(request_origin) {
            OriginDecision::Any => {
                // validate() forbids the wildcard alongside credentials.
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                    "*".to_string(),
                );
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Exact(value) => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(), value);
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Mirror => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ORIGIN);
                if let Some(origin) = request_origin {
                    headers.push(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                        origin.to_string(),
                    );
                    OriginOutcome::Allow(headers)
                } else {
                    OriginOutcome::Disallow(headers)
                }
            }
            OriginDecision::Disallow => {
                let mut headers = HeaderCollection::with_estimate(1);
                if self.options.origin.vary_on_disallow() {
                    headers.add_vary(header::ORIGIN);
                }
                OriginOutcome::Disallow(headers)
            }
            OriginDecision::Skip => OriginOutcome::Skip,
        }
    }

    /// Headers attached to a rejected preflight: never any
    /// `Access-Control-Allow-*` values, only the cache-correctness `Vary`.
    pub(crate) fn build_rejection_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.origin.vary_on_disallow() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS.to_string(), value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        match &self.options.allowed_headers {
            AllowedHeaders::List(values) if values.is_empty() => HeaderCollection::new(),
            AllowedHeaders::List(values) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
                    values.join(", "),
                );
                headers
            }
            // Wildcard config echoes the literal requested set, preserving
            // its casing; a literal `*` would be taken verbatim by browsers
            // when credentials are enabled.
            AllowedHeaders::Any => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = request
                    .access_control_request_headers
                    .filter(|value| !value.trim().is_empty())
                {
                    headers.push(
                        header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
                        requested.to_string(),
                    );
                }
                headers
            }
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.options.exposed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS.to_string(), value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.max_age {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE.to_string(),
                value.to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
