use crate::constants::header;
use crate::header_list::{canonical_header_name, parse_header_list};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static DEFAULT_HEADERS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        header::ORIGIN,
        header::ACCEPT,
        header::CONTENT_TYPE,
        header::X_REQUESTED_WITH,
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
});

/// Compiled policy for the preflight `Access-Control-Request-Headers` check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum HeaderRule {
    /// Wildcard: any requested header list passes.
    Any,
    /// Canonicalized allow-set; membership is case-insensitive because both
    /// sides go through the same canonical casing.
    List(HashSet<String>),
}

impl Default for HeaderRule {
    fn default() -> Self {
        Self::List(DEFAULT_HEADERS.clone())
    }
}

impl HeaderRule {
    /// A literal `"*"` entry switches to [`HeaderRule::Any`]; an empty list
    /// falls back to the Origin/Accept/Content-Type/X-Requested-With default.
    pub(crate) fn compile(headers: &[String]) -> Self {
        if headers.is_empty() {
            return Self::default();
        }

        let mut allowed = HashSet::with_capacity(headers.len());
        for name in headers {
            if name == "*" {
                return Self::Any;
            }
            allowed.insert(canonical_header_name(name));
        }
        Self::List(allowed)
    }

    /// Checks a raw comma-separated request header-list. Every parsed token
    /// except `Origin` must be in the allow-set; a single miss fails the
    /// whole list.
    pub(crate) fn allows(&self, raw: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => {
                if raw.is_empty() {
                    return true;
                }
                parse_header_list(raw)
                    .into_iter()
                    .filter(|token| token != header::ORIGIN)
                    .all(|token| allowed.contains(&token))
            }
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
