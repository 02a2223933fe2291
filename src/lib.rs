pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod case;
mod context;
mod cors;
mod header_list;
mod headers;
mod logger;
mod options;
mod origin;
mod response;
mod result;

pub use context::RequestContext;
pub use cors::Cors;
pub use header_list::{canonical_header_name, parse_header_list};
pub use headers::Headers;
pub use logger::{Logger, TraceLogger};
pub use options::{CorsOptions, origin_predicate, origin_request_predicate};
pub use origin::{OriginPredicateFn, OriginRequestPredicateFn};
pub use response::{ResponseWriter, apply_headers};
pub use result::{ActualResult, CorsDecision, PreflightResult};
