/// Canonical MIME-style casing for a header name: the first letter of each
/// hyphen-separated segment uppercased, the rest lowercased. Values that are
/// not valid HTTP tokens are only trimmed, never rewritten.
pub fn canonical_header_name(value: &str) -> String {
    let trimmed = value.trim();
    if !is_http_token(trimmed) {
        return trimmed.to_string();
    }

    let mut canonical = String::with_capacity(trimmed.len());
    let mut upper_next = true;
    for byte in trimmed.bytes() {
        if byte == b'-' {
            canonical.push('-');
            upper_next = true;
        } else if upper_next {
            canonical.push(byte.to_ascii_uppercase() as char);
            upper_next = false;
        } else {
            canonical.push(byte.to_ascii_lowercase() as char);
        }
    }
    canonical
}

/// Splits a comma-separated header-list value into canonicalized tokens,
/// discarding empty entries.
pub fn parse_header_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(canonical_header_name)
        .collect()
}

fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;
