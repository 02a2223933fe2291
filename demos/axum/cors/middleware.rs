use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers, RequestContext};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors = state.cors.clone();
    let snapshot = OwnedRequestContext::from_request(&request);

    match cors.check(&snapshot.as_request_context()) {
        CorsDecision::Preflight(result) => {
            let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
            let mut response = Response::builder()
                .status(status)
                .body(Body::empty())
                .expect("valid preflight response");
            write_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::Actual(result) => {
            let mut response = next.run(request).await;
            write_headers(response.headers_mut(), &result.headers);
            response
        }
    }
}

fn write_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            continue;
        };

        if name.eq_ignore_ascii_case(header::VARY) {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    uri: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            uri: request.uri().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            uri: &self.uri,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
