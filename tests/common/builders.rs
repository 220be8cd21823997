#![allow(dead_code)]

use cors_gate::constants::method;
use cors_gate::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, ExposedHeaders, Origin,
    PathPattern, RequestContext,
};

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}

#[derive(Default)]
pub struct GateBuilder {
    path_pattern: Option<String>,
    origin: Option<Origin>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<Option<u64>>,
    success_status: Option<u16>,
    rejection_status: Option<u16>,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_pattern(mut self, pattern: &str) -> Self {
        self.path_pattern = Some(pattern.to_string());
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn methods_any(mut self) -> Self {
        self.methods = Some(AllowedMethods::any());
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.max_age = Some(Some(value));
        self
    }

    pub fn no_max_age(mut self) -> Self {
        self.max_age = Some(None);
        self
    }

    pub fn success_status(mut self, status: u16) -> Self {
        self.success_status = Some(status);
        self
    }

    pub fn rejection_status(mut self, status: u16) -> Self {
        self.rejection_status = Some(status);
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();

        CorsOptions {
            path_pattern: match self.path_pattern {
                Some(pattern) => PathPattern::new(&pattern).expect("valid path pattern"),
                None => defaults.path_pattern,
            },
            origin: self.origin.unwrap_or(defaults.origin),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            preflight_success_status: self
                .success_status
                .unwrap_or(defaults.preflight_success_status),
            preflight_rejection_status: self
                .rejection_status
                .unwrap_or(defaults.preflight_rejection_status),
        }
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options()).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.to_string(),
            path: "/api/tickets".to_string(),
            origin: None,
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    pub fn check(&self, gate: &Cors) -> CorsDecision {
        gate.check(&RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        })
    }
}

impl Default for SimpleRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PreflightRequestBuilder {
    path: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            path: "/api/tickets".to_string(),
            origin: None,
            request_method: Some(method::POST.to_string()),
            request_headers: None,
        }
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    pub fn request_method(mut self, method: &str) -> Self {
        self.request_method = Some(method.to_string());
        self
    }

    pub fn no_request_method(mut self) -> Self {
        self.request_method = None;
        self
    }

    pub fn request_headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(&self, gate: &Cors) -> CorsDecision {
        gate.check(&RequestContext {
            method: method::OPTIONS,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        })
    }
}

impl Default for PreflightRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
