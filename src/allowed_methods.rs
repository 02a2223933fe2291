use crate::constants::method;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static DEFAULT_METHODS: Lazy<HashSet<String>> = Lazy::new(|| {
    [method::GET, method::POST, method::HEAD]
        .into_iter()
        .map(str::to_owned)
        .collect()
});

/// Compiled set of HTTP methods an actual or preflighted request may use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MethodRule {
    allowed: HashSet<String>,
}

impl Default for MethodRule {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_METHODS.clone(),
        }
    }
}

impl MethodRule {
    /// Uppercases each configured entry; an empty list falls back to the
    /// GET/POST/HEAD default.
    pub(crate) fn compile(methods: &[String]) -> Self {
        if methods.is_empty() {
            return Self::default();
        }
        Self {
            allowed: methods
                .iter()
                .map(|method| method.to_ascii_uppercase())
                .collect(),
        }
    }

    /// OPTIONS is always allowed; everything else must be configured.
    pub(crate) fn allows(&self, requested: &str) -> bool {
        let requested = requested.to_ascii_uppercase();
        requested == method::OPTIONS || self.allowed.contains(&requested)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
