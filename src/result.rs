use crate::headers::Headers;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// Successful preflight: respond with `status`, the headers, and no
    /// body; the wrapped handler must not run.
    PreflightAccepted(PreflightResult),
    /// Failed preflight: respond with the 4xx `status` and no
    /// `Access-Control-Allow-*` headers; the wrapped handler must not run.
    PreflightRejected(PreflightRejection),
    /// Cross-origin request from an allowed origin: attach the headers and
    /// run the handler.
    SimpleAccepted(SimpleResult),
    /// Cross-origin request from a disallowed origin: attach only the
    /// headers carried here (at most `Vary`) and still run the handler —
    /// denial is enforced by the browser, not at the network layer.
    SimpleRejected(SimpleRejection),
    /// The policy does not apply (out-of-scope path or same-origin
    /// request): add nothing, change nothing.
    NotApplicable,
}

#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

#[derive(Debug, Clone)]
pub struct PreflightRejection {
    pub reason: PreflightRejectionReason,
    pub headers: Headers,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

#[derive(Debug, Clone)]
pub struct SimpleRejection {
    pub reason: SimpleRejectionReason,
    pub headers: Headers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
}
