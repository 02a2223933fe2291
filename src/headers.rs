use crate::constants::header;
use indexmap::IndexMap;

/// Response headers produced by one evaluation, keyed by canonical name.
/// Insertion order is preserved so emitted responses are deterministic.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set-semantics for everything except `Vary`, which accumulates.
    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value.into());
        } else {
            self.headers.insert(name.to_string(), value.into());
        }
    }

    /// Appends one entry to the `Vary` value, comma-space joined and
    /// deduplicated case-insensitively.
    pub(crate) fn add_vary(&mut self, value: impl Into<String>) {
        let incoming = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        match self.headers.get_mut(header::VARY) {
            Some(existing) => {
                let duplicate = existing
                    .split(',')
                    .any(|entry| entry.trim().eq_ignore_ascii_case(incoming));
                if !duplicate {
                    existing.push_str(", ");
                    existing.push_str(incoming);
                }
            }
            None => {
                self.headers
                    .insert(header::VARY.to_string(), incoming.to_string());
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
