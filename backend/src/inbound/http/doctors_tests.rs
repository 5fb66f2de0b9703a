//! Tests for the doctor directory endpoints.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use insta::{assert_json_snapshot, with_settings};
use mockall::predicate::eq;
use pagination::{Page, PageRequest};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    ListingSource, MockDoctorListingQuery, MockDoctorRegistrationCommand,
    UnconfiguredDoctorRepository,
};
use crate::domain::{
    DoctorDirectoryService, DoctorId, ErrorCode, FallbackDirectory, Gender, SortKey,
};

#[fixture]
fn valid_body() -> Value {
    json!({
        "name": "Dr. Asha Rao",
        "specialty": "Cardiology",
        "gender": "female",
        "city": "Hyderabad",
        "experience": 11,
        "rating": 4.6,
        "image": "https://example.com/asha.jpg",
        "hospital": "Care Hospitals",
        "fee": 700,
        "reviewCount": 40,
        "unknownField": true
    })
}

fn state(
    listing: MockDoctorListingQuery,
    registration: MockDoctorRegistrationCommand,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(listing), Arc::new(registration)))
}

fn fallback_state() -> web::Data<HttpState> {
    let service = DoctorDirectoryService::new(
        Arc::new(UnconfiguredDoctorRepository),
        FallbackDirectory::bundled().expect("bundled samples are valid"),
    );
    web::Data::new(HttpState::from_service(Arc::new(service)))
}

async fn call(
    state: web::Data<HttpState>,
    request: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api").service(add_doctor).service(list_doctors)),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

fn error_fields(body: &Value) -> Vec<&str> {
    body["details"]["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|error| error["field"].as_str().expect("field name"))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn add_doctor_returns_created_doctor(valid_body: Value) {
    let mut registration = MockDoctorRegistrationCommand::new();
    registration
        .expect_register_doctor()
        .times(1)
        .returning(|doctor| Ok(doctor.into_doctor(DoctorId::new("abc").expect("id"))));

    let response = call(
        state(MockDoctorListingQuery::new(), registration),
        actix_test::TestRequest::post()
            .uri("/api/add-doctor")
            .set_json(valid_body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["_id"], "abc");
    assert_eq!(body["name"], "Dr. Asha Rao");
    assert_eq!(body["reviewCount"], 40.0);
    assert!(body.get("unknownField").is_none());
}

#[rstest]
#[actix_web::test]
async fn add_doctor_rejects_rating_without_touching_store(mut valid_body: Value) {
    valid_body["rating"] = json!(6);
    let mut registration = MockDoctorRegistrationCommand::new();
    registration.expect_register_doctor().times(0);

    let response = call(
        state(MockDoctorListingQuery::new(), registration),
        actix_test::TestRequest::post()
            .uri("/api/add-doctor")
            .set_json(valid_body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Validation error");
    assert_eq!(error_fields(&body), vec!["rating"]);
}

#[rstest]
#[actix_web::test]
async fn add_doctor_reports_missing_and_mistyped_fields_first(mut valid_body: Value) {
    let object = valid_body.as_object_mut().expect("object body");
    object.remove("name");
    object.insert("fee".into(), json!("500"));
    object.insert("rating".into(), json!(9));
    let mut registration = MockDoctorRegistrationCommand::new();
    registration.expect_register_doctor().times(0);

    let response = call(
        state(MockDoctorListingQuery::new(), registration),
        actix_test::TestRequest::post()
            .uri("/api/add-doctor")
            .set_json(valid_body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    with_settings!({ sort_maps => true }, {
        assert_json_snapshot!(body["details"], @r#"
        {
          "errors": [
            {
              "code": "missing_field",
              "field": "name",
              "message": "name is required"
            },
            {
              "code": "invalid_type",
              "field": "fee",
              "message": "fee must be a number"
            }
          ]
        }
        "#);
    });
}

#[rstest]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE, "doctor store unavailable")]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")]
#[actix_web::test]
async fn add_doctor_maps_store_failures(
    valid_body: Value,
    #[case] code: ErrorCode,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let mut registration = MockDoctorRegistrationCommand::new();
    registration
        .expect_register_doctor()
        .times(1)
        .returning(move |_| Err(Error::new(code, "doctor store unavailable")));

    let response = call(
        state(MockDoctorListingQuery::new(), registration),
        actix_test::TestRequest::post()
            .uri("/api/add-doctor")
            .set_json(valid_body),
    )
    .await;

    assert_eq!(response.status(), status);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], message);
}

#[actix_web::test]
async fn list_passes_parsed_filter_to_port() {
    let expected = DoctorFilter::default()
        .with_city("pune")
        .with_gender(Gender::Male)
        .with_sort(SortKey::Name)
        .with_page(PageRequest::new(2, 5).expect("valid window"));
    let mut listing = MockDoctorListingQuery::new();
    listing
        .expect_list_doctors()
        .with(eq(expected))
        .times(1)
        .returning(|filter| DoctorListing {
            source: ListingSource::Primary,
            page: Page::from_parts(Vec::new(), 6, filter.page_request()),
        });

    let response = call(
        state(listing, MockDoctorRegistrationCommand::new()),
        actix_test::TestRequest::get()
            .uri("/api/list-doctor-with-filter?city=%20pune%20&gender=male&sortBy=name&page=2&limit=5&extra=1"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(DIRECTORY_SOURCE_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some("primary")
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"doctors": [], "total": 6, "page": 2, "limit": 5, "totalPages": 2})
    );
}

#[actix_web::test]
async fn list_rejects_every_bad_parameter() {
    let mut listing = MockDoctorListingQuery::new();
    listing.expect_list_doctors().times(0);

    let response = call(
        state(listing, MockDoctorRegistrationCommand::new()),
        actix_test::TestRequest::get()
            .uri("/api/list-doctor-with-filter?page=0&limit=51&gender=other&ratingMin=high"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        error_fields(&body),
        vec!["gender", "ratingMin", "page", "limit"]
    );
}

#[rstest]
#[case("city=mumbai&page=1&limit=10", 1, 1, 1)]
#[case("gender=female&page=1&limit=1", 1, 2, 2)]
#[case("page=3&limit=2", 1, 5, 3)]
#[case("page=9", 0, 5, 1)]
#[actix_web::test]
async fn list_falls_back_to_bundled_doctors(
    #[case] query: &str,
    #[case] returned: usize,
    #[case] total: u64,
    #[case] total_pages: u64,
) {
    let response = call(
        fallback_state(),
        actix_test::TestRequest::get().uri(&format!("/api/list-doctor-with-filter?{query}")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(DIRECTORY_SOURCE_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some("fallback")
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["doctors"].as_array().map(Vec::len), Some(returned));
    assert_eq!(body["total"], total);
    assert_eq!(body["totalPages"], total_pages);
}

#[actix_web::test]
async fn empty_fallback_listing_envelope() {
    let response = call(
        fallback_state(),
        actix_test::TestRequest::get().uri("/api/list-doctor-with-filter?city=Kolkata&limit=20"),
    )
    .await;

    let body: Value = actix_test::read_body_json(response).await;
    with_settings!({ sort_maps => true }, {
        assert_json_snapshot!(body, @r#"
        {
          "doctors": [],
          "limit": 20,
          "page": 1,
          "total": 0,
          "totalPages": 0
        }
        "#);
    });
}
