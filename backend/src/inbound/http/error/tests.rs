//! Status mapping, redaction and extractor handlers.

use super::*;
use crate::domain::Error;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::{App, ResponseError, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

const TRACE: &str = "7d4e1f0a-3b2c-4d5e-8f6a-9b0c1d2e3f4a";

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn each_code_has_one_status(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(status_for(code), status);
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), status);
}

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let trace = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    (status, trace, body)
}

#[actix_web::test]
async fn store_failure_message_is_hidden_but_trace_survives() {
    let error = Error::internal("insert into doctors failed: relation missing")
        .with_trace_id(TRACE)
        .with_details(json!({"sql": "INSERT ..."}));

    let (status, trace, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace.as_deref(), Some(TRACE));
    assert_eq!(
        body,
        json!({"code": "internal_error", "message": "Internal server error", "traceId": TRACE})
    );
}

#[actix_web::test]
async fn validation_details_reach_the_client() {
    let details = json!({"errors": [{"field": "rating", "code": "out_of_range", "message": "rating must be between 0 and 5"}]});
    let error = Error::invalid_request("Validation error")
        .with_trace_id(TRACE)
        .with_details(details.clone());

    let (status, trace, body) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(trace.as_deref(), Some(TRACE));
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["details"], details);
}

#[actix_web::test]
async fn untraced_error_has_no_trace_header() {
    let (status, trace, body) = render(&Error::service_unavailable("doctor store unavailable")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(trace, None);
    assert!(body.get("traceId").is_none());
}

#[test]
fn redaction_keeps_non_internal_errors() {
    let error = Error::not_found("gone").with_details(json!({"id": "1"}));
    assert_eq!(redact_if_internal(&error), error);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
    assert_eq!(err.details(), None);
}

#[derive(serde::Deserialize)]
struct Sample {
    #[expect(dead_code, reason = "exercised only through deserialisation")]
    count: u32,
}

async fn sample_json(_body: web::Json<Sample>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn sample_query(_query: web::Query<Sample>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn body_of(response: actix_web::dev::ServiceResponse) -> Value {
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn malformed_json_is_reported_as_invalid_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/sample", web::post().to(sample_json)),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/sample")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Malformed JSON body");
}

#[actix_web::test]
async fn wrong_content_type_is_reported() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/sample", web::post().to(sample_json)),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/sample")
        .insert_header(("content-type", "text/plain"))
        .set_payload("count=1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert_eq!(body["message"], "Content-Type must be application/json");
}

#[actix_web::test]
async fn undecodable_query_is_reported_as_invalid_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .route("/sample", web::get().to(sample_query)),
    )
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/sample?count=many")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Malformed query string");
}

#[actix_web::test]
async fn unknown_api_route_returns_json_not_found() {
    let app = actix_test::init_service(
        App::new().service(web::scope("/api").default_service(web::to(api_not_found))),
    )
    .await;

    let request = actix_test::TestRequest::get().uri("/api/nope").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_of(response).await;
    assert_eq!(
        body,
        json!({"code": "not_found", "message": "API route not found"})
    );
}
