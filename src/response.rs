use crate::constants::header;
use crate::headers::Headers;

/// Minimal surface the engine needs from a host response object.
///
/// `set` replaces any existing value for the name; `append` adds another
/// value alongside existing ones (used for `Vary`, which other layers may
/// also touch).
pub trait ResponseWriter {
    fn set(&mut self, name: &str, value: &str);
    fn append(&mut self, name: &str, value: &str);
    fn set_status(&mut self, status: u16);
}

/// Writes evaluated headers to a host response: `Vary` entries are appended
/// one by one, every other header overwrites.
pub fn apply_headers<W: ResponseWriter>(headers: &Headers, response: &mut W) {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            for entry in value.split(',') {
                let entry = entry.trim();
                if !entry.is_empty() {
                    response.append(header::VARY, entry);
                }
            }
        } else {
            response.set(name, value);
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
