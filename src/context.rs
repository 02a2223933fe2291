/// Borrowed snapshot of the inbound request, as seen by the policy engine.
///
/// Hosts build one of these from their own request type; the engine never
/// touches the underlying request object. Absent headers are `None`; an
/// empty header value is treated the same as an absent one.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
