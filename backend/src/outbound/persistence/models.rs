//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::doctors;

/// Row struct for reading from the doctors table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = doctors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DoctorRow {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub gender: String,
    pub city: String,
    pub experience: f64,
    pub rating: f64,
    pub image: String,
    pub hospital: Option<String>,
    pub fee: f64,
    pub review_count: Option<f64>,
}

/// Insertable struct for creating new doctor records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = doctors)]
pub(crate) struct NewDoctorRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub specialty: &'a str,
    pub gender: &'a str,
    pub city: &'a str,
    pub experience: f64,
    pub rating: f64,
    pub image: &'a str,
    pub hospital: Option<&'a str>,
    pub fee: f64,
    pub review_count: Option<f64>,
}
