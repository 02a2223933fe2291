use crate::case::normalize_lower;
use crate::context::RequestContext;
use std::collections::HashSet;
use std::sync::Arc;

/// Origin-only allow predicate.
pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// Request-aware allow predicate; sees the whole request snapshot.
pub type OriginRequestPredicateFn =
    dyn for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync;

/// Compiled origin policy. Exactly one variant is active per engine.
#[derive(Clone, Default)]
pub(crate) enum OriginRule {
    #[default]
    Any,
    List(HashSet<String>),
    Predicate(Arc<OriginPredicateFn>),
    RequestPredicate(Arc<OriginRequestPredicateFn>),
}

impl OriginRule {
    /// Resolves the rule from raw configuration. The most specific source
    /// wins: a request-aware predicate over an origin-only predicate over an
    /// explicit list. A literal `"*"` entry anywhere in the list turns the
    /// whole rule into [`OriginRule::Any`].
    pub(crate) fn compile(
        origins: &[String],
        predicate: Option<Arc<OriginPredicateFn>>,
        request_predicate: Option<Arc<OriginRequestPredicateFn>>,
    ) -> Self {
        if let Some(predicate) = request_predicate {
            return Self::RequestPredicate(predicate);
        }
        if let Some(predicate) = predicate {
            return Self::Predicate(predicate);
        }
        if origins.is_empty() {
            return Self::Any;
        }

        let mut allowed = HashSet::with_capacity(origins.len());
        for origin in origins {
            let origin = normalize_lower(origin);
            if origin == "*" {
                return Self::Any;
            }
            allowed.insert(origin);
        }
        Self::List(allowed)
    }

    /// List membership is tested on the lowercased origin; predicates see
    /// the origin exactly as the browser sent it.
    pub(crate) fn allows(&self, request: &RequestContext<'_>, origin: &str) -> bool {
        match self {
            OriginRule::Any => true,
            OriginRule::RequestPredicate(predicate) => predicate(request, origin),
            OriginRule::Predicate(predicate) => predicate(origin),
            OriginRule::List(allowed) => allowed.contains(&normalize_lower(origin)),
        }
    }

    pub(crate) fn is_any(&self) -> bool {
        matches!(self, OriginRule::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
