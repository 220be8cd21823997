pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod normalized_request;
mod options;
mod origin;
mod path_pattern;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision, OriginMatcher};
pub use path_pattern::{PathPattern, PatternError};
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, PreflightResult, SimpleRejection,
    SimpleRejectionReason, SimpleResult,
};
