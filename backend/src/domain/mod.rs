//! Domain primitives, services and ports for the doctor directory.
//!
//! Purpose: define strongly typed entities, the listing filter and the
//! directory service that the HTTP and persistence adapters meet at. Keep
//! types immutable and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload and its code.
//! - `Doctor` / `NewDoctor`: stored and unstored doctor profiles.
//! - `DoctorFilter`: validated listing parameters.
//! - `DoctorDirectoryService`: implementation of the driving ports.

pub mod directory_service;
pub mod doctor;
pub mod doctor_filter;
pub mod doctor_query;
pub mod error;
pub mod fallback_directory;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::directory_service::DoctorDirectoryService;
pub use self::doctor::{
    Doctor, DoctorId, EmptyDoctorId, Gender, NewDoctor, NewDoctorDraft, RATING_MAX, UnknownGender,
};
pub use self::doctor_filter::{DoctorFilter, RawDoctorFilter, SortKey};
pub use self::doctor_query::{DoctorCriteria, DoctorQuery, SortDirection, SortField, SortOrder};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fallback_directory::{FallbackDirectory, InvalidSampleDoctor};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    FieldViolation, VALIDATION_ERROR_MESSAGE, ValidationError, ViolationCode,
};
