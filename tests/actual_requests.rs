mod common;

use common::asserts::{assert_actual, assert_header_eq, assert_no_header, assert_vary_eq};
use common::builders::{CorsBuilder, actual_request, cors};
use cors_gate::constants::{header, method};

#[test]
fn allow_all_preset_grants_wildcard_origin() {
    let cors = CorsBuilder::allow_all().build();

    let headers = assert_actual(actual_request().origin("http://a.com").check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
}

#[test]
fn explicit_allow_list_echoes_the_request_origin() {
    let cors = cors().origins(["http://a.com"]).build();

    let headers = assert_actual(actual_request().origin("http://a.com").check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "http://a.com");
}

#[test]
fn origin_matching_ignores_case_but_echo_preserves_it() {
    let cors = cors().origins(["HTTP://A.COM"]).build();

    let headers = assert_actual(actual_request().origin("http://A.com").check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "http://A.com");
}

#[test]
fn vary_carries_origin_only() {
    let cors = cors().build();

    let headers = assert_actual(actual_request().origin("http://a.com").check(&cors));

    assert_vary_eq(&headers, [header::ORIGIN]);
}

#[test]
fn missing_origin_yields_vary_only() {
    let cors = cors().build();

    let headers = assert_actual(actual_request().check(&cors));

    assert_eq!(headers.len(), 1);
    assert_vary_eq(&headers, [header::ORIGIN]);
}

#[test]
fn disallowed_origin_yields_vary_only() {
    let cors = cors().origins(["http://allowed.test"]).build();

    let headers = assert_actual(actual_request().origin("http://other.test").check(&cors));

    assert_no_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN);
}

#[test]
fn method_outside_the_configured_set_is_not_granted() {
    let cors = cors().build();

    let headers = assert_actual(
        actual_request()
            .method(method::DELETE)
            .origin("http://a.com")
            .check(&cors),
    );

    assert_no_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN);
}

#[test]
fn options_without_request_method_flows_through_the_actual_path() {
    // OPTIONS alone is not a preflight; it is evaluated like any other
    // method, and OPTIONS itself is always allowed.
    let cors = cors().build();

    let headers = assert_actual(
        actual_request()
            .method(method::OPTIONS)
            .origin("http://a.com")
            .check(&cors),
    );

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    assert_vary_eq(&headers, [header::ORIGIN]);
}

#[test]
fn exposed_headers_are_joined_into_one_value() {
    let cors = cors()
        .exposed_headers(["x-request-id", "content-length"])
        .build();

    let headers = assert_actual(actual_request().origin("http://a.com").check(&cors));

    assert_header_eq(
        &headers,
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        "X-Request-Id, Content-Length",
    );
}

#[test]
fn no_exposed_headers_means_no_expose_header() {
    let cors = cors().build();

    let headers = assert_actual(actual_request().origin("http://a.com").check(&cors));

    assert_no_header(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS);
}

#[test]
fn credentials_flag_is_reflected() {
    let cors = cors().credentials(true).build();

    let headers = assert_actual(actual_request().origin("http://a.com").check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
}
