use crate::constants::method;
use crate::logger::Logger;
use crate::origin::{OriginPredicateFn, OriginRequestPredicateFn};
use std::sync::Arc;

/// Raw engine configuration.
///
/// Every field has a documented fallback, so any combination compiles into
/// a working engine; see [`Cors::new`](crate::Cors::new). Build one with a
/// struct literal plus `..Default::default()`.
#[derive(Clone, Default)]
pub struct CorsOptions {
    /// Explicit origin allow-list. A literal `"*"` entry allows every
    /// origin. Empty means allow-all unless a predicate is configured.
    pub origins: Vec<String>,
    /// Origin-only allow predicate; overrides `origins`.
    pub origin_predicate: Option<Arc<OriginPredicateFn>>,
    /// Request-aware allow predicate; overrides `origin_predicate`.
    pub origin_request_predicate: Option<Arc<OriginRequestPredicateFn>>,
    /// Methods allowed for cross-origin requests. Empty defaults to
    /// GET, POST, HEAD. OPTIONS is always allowed.
    pub methods: Vec<String>,
    /// Request headers allowed on preflight. A literal `"*"` allows any;
    /// empty defaults to Origin, Accept, Content-Type, X-Requested-With.
    pub allowed_headers: Vec<String>,
    /// Values for `Access-Control-Expose-Headers` on actual responses.
    pub exposed_headers: Vec<String>,
    /// Seconds for `Access-Control-Max-Age`; zero or negative omits the
    /// header.
    pub max_age: i64,
    /// Emit `Access-Control-Allow-Credentials: true`. Note that with an
    /// allow-all origin policy the engine still answers with a literal `*`,
    /// which browsers refuse to pair with credentialed requests.
    pub credentials: bool,
    /// Log every abort decision through `logger`.
    pub debug: bool,
    /// Debug sink; when unset a `tracing`-backed default is used.
    pub logger: Option<Arc<dyn Logger>>,
}

impl CorsOptions {
    /// Permissive preset: any origin, the common mutating methods, any
    /// header.
    pub fn allow_all() -> Self {
        Self {
            origins: vec!["*".into()],
            methods: [
                method::GET,
                method::POST,
                method::PUT,
                method::PATCH,
                method::DELETE,
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            allowed_headers: vec!["*".into()],
            ..Self::default()
        }
    }
}

/// Wraps an origin-only closure for [`CorsOptions::origin_predicate`].
pub fn origin_predicate<F>(predicate: F) -> Option<Arc<OriginPredicateFn>>
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Some(Arc::new(predicate))
}

/// Wraps a request-aware closure for
/// [`CorsOptions::origin_request_predicate`].
pub fn origin_request_predicate<F>(predicate: F) -> Option<Arc<OriginRequestPredicateFn>>
where
    F: for<'a> Fn(&crate::RequestContext<'a>, &str) -> bool + Send + Sync + 'static,
{
    Some(Arc::new(predicate))
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
