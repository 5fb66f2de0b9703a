//! Doctor directory endpoints.
//!
//! ```text
//! POST /api/add-doctor
//! GET  /api/list-doctor-with-filter
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::DoctorListing;
use crate::domain::validation::Violations;
use crate::domain::{
    Doctor, DoctorFilter, Error, FieldViolation, NewDoctor, NewDoctorDraft, RawDoctorFilter,
    ValidationError, ViolationCode,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response header naming the listing source, `primary` or `fallback`.
pub const DIRECTORY_SOURCE_HEADER: &str = "x-directory-source";

/// Request body for `POST /api/add-doctor`.
///
/// Fields are kept as raw JSON so missing and mistyped fields are reported
/// together with a field name, before value checks run. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDoctorRequest {
    #[schema(value_type = String, example = "Dr. Rajesh Kumar")]
    pub name: Option<Value>,
    #[schema(value_type = String, example = "General Physician")]
    pub specialty: Option<Value>,
    #[schema(value_type = crate::domain::Gender)]
    pub gender: Option<Value>,
    #[schema(value_type = String, example = "Mumbai")]
    pub city: Option<Value>,
    #[schema(value_type = f64, example = 15)]
    pub experience: Option<Value>,
    #[schema(value_type = f64, example = 4.5)]
    pub rating: Option<Value>,
    #[schema(value_type = String, example = "https://example.com/portrait.jpg")]
    pub image: Option<Value>,
    #[schema(value_type = Option<String>, example = "Apollo Hospital")]
    pub hospital: Option<Value>,
    #[schema(value_type = f64, example = 500)]
    pub fee: Option<Value>,
    #[schema(value_type = Option<f64>, example = 125)]
    pub review_count: Option<Value>,
}

fn missing(field: &str) -> FieldViolation {
    FieldViolation::new(
        field,
        ViolationCode::MissingField,
        format!("{field} is required"),
    )
}

fn wrong_type(field: &str, expected: &str) -> FieldViolation {
    FieldViolation::new(
        field,
        ViolationCode::InvalidType,
        format!("{field} must be a {expected}"),
    )
}

fn optional_text(value: Option<Value>, field: &str) -> Result<Option<String>, FieldViolation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(wrong_type(field, "string")),
    }
}

fn optional_number(value: Option<Value>, field: &str) -> Result<Option<f64>, FieldViolation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "number")),
        Some(_) => Err(wrong_type(field, "number")),
    }
}

fn required_text(value: Option<Value>, field: &str) -> Result<String, FieldViolation> {
    optional_text(value, field)?.ok_or_else(|| missing(field))
}

fn required_number(value: Option<Value>, field: &str) -> Result<f64, FieldViolation> {
    optional_number(value, field)?.ok_or_else(|| missing(field))
}

impl TryFrom<AddDoctorRequest> for NewDoctorDraft {
    type Error = ValidationError;

    fn try_from(request: AddDoctorRequest) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();

        let name = violations.check(required_text(request.name, "name"));
        let specialty = violations.check(required_text(request.specialty, "specialty"));
        let gender = violations.check(required_text(request.gender, "gender"));
        let city = violations.check(required_text(request.city, "city"));
        let experience = violations.check(required_number(request.experience, "experience"));
        let rating = violations.check(required_number(request.rating, "rating"));
        let image = violations.check(required_text(request.image, "image"));
        let hospital = violations.check(optional_text(request.hospital, "hospital"));
        let fee = violations.check(required_number(request.fee, "fee"));
        let review_count = violations.check(optional_number(request.review_count, "reviewCount"));

        violations.finish(|| {
            Some(Self {
                name: name?,
                specialty: specialty?,
                gender: gender?,
                city: city?,
                experience: experience?,
                rating: rating?,
                image: image?,
                hospital: hospital?,
                fee: fee?,
                review_count: review_count?,
            })
        })
    }
}

impl TryFrom<AddDoctorRequest> for NewDoctor {
    type Error = ValidationError;

    fn try_from(request: AddDoctorRequest) -> Result<Self, Self::Error> {
        NewDoctor::new(NewDoctorDraft::try_from(request)?)
    }
}

/// Response body for `GET /api/list-doctor-with-filter`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListResponse {
    pub doctors: Vec<Doctor>,
    /// Matching doctors across all pages.
    #[schema(example = 23)]
    pub total: u64,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub limit: u32,
    /// `ceil(total / limit)`, 0 when nothing matched.
    #[schema(example = 3)]
    pub total_pages: u64,
}

impl From<DoctorListing> for DoctorListResponse {
    fn from(listing: DoctorListing) -> Self {
        let page = listing.page;
        Self {
            total: page.total(),
            page: page.page(),
            limit: page.limit(),
            total_pages: page.total_pages(),
            doctors: page.into_items(),
        }
    }
}

/// Add a doctor to the directory.
#[utoipa::path(
    post,
    path = "/api/add-doctor",
    description = "Validate and store a doctor profile. Every invalid field is listed in `details.errors`.",
    request_body = AddDoctorRequest,
    responses(
        (status = 201, description = "Doctor stored", body = Doctor),
        (status = 400, description = "Validation error", body = Error),
        (status = 503, description = "Doctor store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["doctors"],
    operation_id = "addDoctor"
)]
#[post("/add-doctor")]
pub async fn add_doctor(
    state: web::Data<HttpState>,
    payload: web::Json<AddDoctorRequest>,
) -> ApiResult<HttpResponse> {
    let doctor = NewDoctor::try_from(payload.into_inner())?;
    let created = state.registration.register_doctor(doctor).await?;
    Ok(HttpResponse::Created().json(created))
}

/// List doctors matching a filter, one page at a time.
#[utoipa::path(
    get,
    path = "/api/list-doctor-with-filter",
    description = "Filter, sort and paginate the directory. When the doctor store is unavailable the bundled sample doctors answer instead; only search, city and gender apply to them.",
    params(RawDoctorFilter),
    responses(
        (
            status = 200,
            description = "One page of doctors",
            headers(("x-directory-source" = String, description = "`primary` or `fallback`")),
            body = DoctorListResponse
        ),
        (status = 400, description = "Invalid query parameters", body = Error)
    ),
    tags = ["doctors"],
    operation_id = "listDoctorsWithFilter"
)]
#[get("/list-doctor-with-filter")]
pub async fn list_doctors(
    state: web::Data<HttpState>,
    query: web::Query<RawDoctorFilter>,
) -> ApiResult<HttpResponse> {
    let filter = DoctorFilter::parse(query.into_inner())?;
    let listing = state.listing.list_doctors(&filter).await;
    let source = listing.source.as_str();
    Ok(HttpResponse::Ok()
        .insert_header((DIRECTORY_SOURCE_HEADER, source))
        .json(DoctorListResponse::from(listing)))
}

#[cfg(test)]
#[path = "doctors_tests.rs"]
mod tests;
