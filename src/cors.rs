use crate::allowed_headers::HeaderRule;
use crate::allowed_methods::MethodRule;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::header_list::canonical_header_name;
use crate::headers::HeaderCollection;
use crate::logger::{Logger, TraceLogger};
use crate::options::CorsOptions;
use crate::origin::OriginRule;
use crate::response::{ResponseWriter, apply_headers};
use crate::result::{ActualResult, CorsDecision, PreflightResult};
use std::fmt;
use std::sync::Arc;

/// Status for a terminated preflight; some legacy browsers mishandle an
/// empty 204 response here.
const PREFLIGHT_STATUS: u16 = 200;

/// Immutable CORS policy engine.
///
/// Built once from [`CorsOptions`], then shared freely across request
/// handlers (`Arc<Cors>` is the usual shape); evaluation never mutates the
/// engine.
pub struct Cors {
    origin: OriginRule,
    methods: MethodRule,
    allowed_headers: HeaderRule,
    exposed_headers: String,
    max_age: i64,
    credentials: bool,
    debug: Option<Arc<dyn Logger>>,
}

impl Cors {
    /// Compiles the configuration. Construction is total: empty or missing
    /// fields fall back to their documented defaults instead of failing.
    pub fn new(options: CorsOptions) -> Self {
        let CorsOptions {
            origins,
            origin_predicate,
            origin_request_predicate,
            methods,
            allowed_headers,
            exposed_headers,
            max_age,
            credentials,
            debug,
            logger,
        } = options;

        Self {
            origin: OriginRule::compile(&origins, origin_predicate, origin_request_predicate),
            methods: MethodRule::compile(&methods),
            allowed_headers: HeaderRule::compile(&allowed_headers),
            exposed_headers: join_exposed_headers(&exposed_headers),
            max_age,
            credentials,
            debug: debug.then(|| logger.unwrap_or_else(|| Arc::new(TraceLogger))),
        }
    }

    /// Classifies and evaluates a request.
    ///
    /// A request is a preflight iff it is OPTIONS and carries a non-empty
    /// `Access-Control-Request-Method`; everything else takes the actual
    /// path, including plain same-origin traffic.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let has_request_method = !request
            .access_control_request_method
            .unwrap_or_default()
            .is_empty();

        if request.method.eq_ignore_ascii_case(method::OPTIONS) && has_request_method {
            CorsDecision::Preflight(self.handle_preflight(request))
        } else {
            CorsDecision::Actual(self.handle_actual(request))
        }
    }

    /// Runs the engine as one step of a middleware chain.
    ///
    /// Preflights terminate here: headers and status are written and `next`
    /// is never invoked. Actual requests get their headers attached and then
    /// always continue downstream exactly once, even when the origin or
    /// method was rejected.
    pub fn intercept<W, F>(&self, request: &RequestContext<'_>, response: &mut W, next: F)
    where
        W: ResponseWriter,
        F: FnOnce(&mut W),
    {
        match self.check(request) {
            CorsDecision::Preflight(result) => {
                apply_headers(&result.headers, response);
                response.set_status(result.status);
            }
            CorsDecision::Actual(result) => {
                apply_headers(&result.headers, response);
                next(response);
            }
        }
    }

    fn handle_preflight(&self, request: &RequestContext<'_>) -> PreflightResult {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);

        let Some(origin) = non_empty(request.origin) else {
            self.trace(format_args!("preflight request aborted: missing origin"));
            return PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_STATUS,
            };
        };
        if !self.origin.allows(request, origin) {
            self.trace(format_args!(
                "preflight request aborted: origin {origin} not allowed"
            ));
            return PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_STATUS,
            };
        }

        // Classification guarantees a non-empty requested method here.
        let requested_method = request.access_control_request_method.unwrap_or_default();
        if !self.methods.allows(requested_method) {
            self.trace(format_args!(
                "preflight request aborted: method {requested_method} not allowed"
            ));
            return PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_STATUS,
            };
        }

        let requested_headers = request.access_control_request_headers.unwrap_or_default();
        if !self.allowed_headers.allows(requested_headers) {
            self.trace(format_args!(
                "preflight request aborted: headers {requested_headers:?} not allowed"
            ));
            return PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_STATUS,
            };
        }

        if self.origin.is_any() {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            // Echo the request origin byte-for-byte; a credentialed response
            // must never carry a wildcard here.
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        // The requested method and header list are echoed verbatim, not the
        // configured sets.
        headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, requested_method);
        if !requested_headers.is_empty() {
            headers.set(header::ACCESS_CONTROL_ALLOW_HEADERS, requested_headers);
        }
        if self.credentials {
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if self.max_age > 0 {
            headers.set(header::ACCESS_CONTROL_MAX_AGE, self.max_age.to_string());
        }

        PreflightResult {
            headers: headers.into_headers(),
            status: PREFLIGHT_STATUS,
        }
    }

    fn handle_actual(&self, request: &RequestContext<'_>) -> ActualResult {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);

        let Some(origin) = non_empty(request.origin) else {
            self.trace(format_args!("actual request aborted: missing origin"));
            return ActualResult {
                headers: headers.into_headers(),
            };
        };
        if !self.origin.allows(request, origin) {
            self.trace(format_args!(
                "actual request aborted: origin {origin} not allowed"
            ));
            return ActualResult {
                headers: headers.into_headers(),
            };
        }
        if !self.methods.allows(request.method) {
            self.trace(format_args!(
                "actual request aborted: method {} not allowed",
                request.method
            ));
            return ActualResult {
                headers: headers.into_headers(),
            };
        }

        if self.origin.is_any() {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        if !self.exposed_headers.is_empty() {
            headers.set(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.exposed_headers.as_str(),
            );
        }
        if self.credentials {
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }

        ActualResult {
            headers: headers.into_headers(),
        }
    }

    fn trace(&self, message: fmt::Arguments<'_>) {
        if let Some(logger) = &self.debug {
            logger.log(message);
        }
    }
}

fn join_exposed_headers(values: &[String]) -> String {
    values
        .iter()
        .map(|value| canonical_header_name(value))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
