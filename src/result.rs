use crate::headers::Headers;

/// Headers and status for a terminated preflight exchange. The engine never
/// forwards a preflight downstream; the host finalizes the response with
/// `status`.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    /// Always 200; some legacy browsers mishandle an empty 204 preflight
    /// response.
    pub status: u16,
}

/// Headers to attach before an actual request continues downstream.
///
/// A rejected actual request still produces a result carrying only the
/// `Vary` header, because the downstream handler runs regardless; only the
/// browser-facing access grant is withheld.
#[derive(Debug, Clone)]
pub struct ActualResult {
    pub headers: Headers,
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Actual(ActualResult),
}
