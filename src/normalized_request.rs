use crate::context::RequestContext;
use std::borrow::Cow;

/// Case-normalized view of the request fields the engine compares against
/// configuration. Origin and path are left verbatim: origin matching is
/// case-sensitive and paths are matched as received.
pub(crate) struct NormalizedRequest<'a> {
    method: Cow<'a, str>,
    access_control_request_method: Option<Cow<'a, str>>,
    access_control_request_headers: Option<Cow<'a, str>>,
}

impl<'a> NormalizedRequest<'a> {
    pub(crate) fn new(request: &'a RequestContext<'a>) -> Self {
        Self {
            method: Self::normalize_component(request.method),
            access_control_request_method: request
                .access_control_request_method
                .map(Self::normalize_component),
            access_control_request_headers: request
                .access_control_request_headers
                .map(Self::normalize_component),
        }
    }

    fn normalize_component(value: &'a str) -> Cow<'a, str> {
        if value.is_ascii() {
            if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
                Cow::Owned(value.to_ascii_lowercase())
            } else {
                Cow::Borrowed(value)
            }
        } else if value.chars().any(|ch| ch.is_uppercase()) {
            Cow::Owned(value.to_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    }

    pub(crate) fn is_options(&self) -> bool {
        self.method.as_ref() == "options"
    }

    /// A preflight is an `OPTIONS` request carrying a non-blank
    /// `Access-Control-Request-Method`. A bare `OPTIONS` is an ordinary
    /// request.
    pub(crate) fn is_preflight(&self) -> bool {
        self.is_options() && !self.access_control_request_method().trim().is_empty()
    }

    pub(crate) fn access_control_request_method(&self) -> &str {
        self.access_control_request_method
            .as_deref()
            .unwrap_or_default()
    }

    pub(crate) fn access_control_request_headers(&self) -> &str {
        self.access_control_request_headers
            .as_deref()
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "normalized_request_test.rs"]
mod normalized_request_test;
