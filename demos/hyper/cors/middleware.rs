use std::future::Future;
use std::pin::Pin;

use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware service wrapping an inner service with the CORS engine.
#[derive(Clone)]
pub struct CorsGate<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsGate<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsGate<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let snapshot = OwnedRequestContext::from_request(&req);
        let decision = self.cors.check(&snapshot.as_request_context());

        match decision {
            CorsDecision::Preflight(result) => Box::pin(async move {
                let status =
                    StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
                Ok(preflight_response(status, &result.headers))
            }),
            CorsDecision::Actual(result) => {
                let inner = self.inner.clone();
                Box::pin(async move {
                    let mut response = inner.call(req).await?;
                    write_headers(response.headers_mut(), &result.headers);
                    Ok(response)
                })
            }
        }
    }
}

fn preflight_response(status: StatusCode, headers: &Headers) -> Response<CorsBody> {
    let mut builder = Response::builder().status(status);
    if let Some(map) = builder.headers_mut() {
        write_headers(map, headers);
    }
    builder
        .body(Full::new(Bytes::new()))
        .expect("valid preflight response")
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
    fn from_request(request: &Request<Incoming>) -> Self {
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
