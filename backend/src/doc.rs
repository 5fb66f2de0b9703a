//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers the doctor directory
//! endpoints, the health checks, and the schemas they reference. Domain
//! types derive `ToSchema` directly.
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Doctor, Error, ErrorCode, FieldViolation, Gender, NewDoctor, SortKey, ViolationCode,
};
use crate::inbound::http::doctors::{AddDoctorRequest, DoctorListResponse};
use crate::inbound::http::health::HealthStatus;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doctor directory API",
        description = "Register doctors and browse the directory with filters, sorting and pagination."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::doctors::add_doctor,
        crate::inbound::http::doctors::list_doctors,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Doctor,
        NewDoctor,
        Gender,
        SortKey,
        AddDoctorRequest,
        DoctorListResponse,
        Error,
        ErrorCode,
        FieldViolation,
        ViolationCode,
        HealthStatus
    )),
    tags(
        (name = "doctors", description = "Doctor registration and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
