/// Per-request view consumed by [`crate::Cors::check`], borrowed from the
/// embedding HTTP layer. Absent headers are `None`; the engine treats an
/// empty string the same way.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
