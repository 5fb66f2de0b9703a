//! PostgreSQL-backed `DoctorRepository` implementation using Diesel ORM.
//!
//! Rows are converted back through [`NewDoctor`] validation, so a record
//! that no longer satisfies the profile invariants surfaces as a query error
//! instead of reaching a client.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{DoctorRepository, DoctorRepositoryError};
use crate::domain::{Doctor, DoctorCriteria, DoctorId, NewDoctor, NewDoctorDraft, SortOrder};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::doctor_query_translator::{filtered, page_query};
use super::models::{DoctorRow, NewDoctorRow};
use super::pool::DbPool;
use super::schema::doctors;

/// Diesel-backed implementation of the doctor repository port.
#[derive(Clone)]
pub struct DieselDoctorRepository {
    pool: DbPool,
}

impl DieselDoctorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn new_row(id: Uuid, doctor: &NewDoctor) -> NewDoctorRow<'_> {
    NewDoctorRow {
        id,
        name: doctor.name(),
        specialty: doctor.specialty(),
        gender: doctor.gender().as_str(),
        city: doctor.city(),
        experience: doctor.experience(),
        rating: doctor.rating(),
        image: doctor.image(),
        hospital: doctor.hospital(),
        fee: doctor.fee(),
        review_count: doctor.review_count(),
    }
}

/// Convert a database row to a domain doctor.
fn row_to_doctor(row: DoctorRow) -> Result<Doctor, DoctorRepositoryError> {
    let id = row.id;
    let draft = NewDoctorDraft {
        name: row.name,
        specialty: row.specialty,
        gender: row.gender,
        city: row.city,
        experience: row.experience,
        rating: row.rating,
        image: row.image,
        hospital: row.hospital,
        fee: row.fee,
        review_count: row.review_count,
    };
    let profile = NewDoctor::new(draft).map_err(|err| {
        DoctorRepositoryError::query(format!("stored doctor {id} is invalid: {err}"))
    })?;
    Ok(profile.into_doctor(DoctorId::from(id)))
}

fn count_to_u64(count: i64) -> Result<u64, DoctorRepositoryError> {
    u64::try_from(count)
        .map_err(|_| DoctorRepositoryError::query(format!("negative doctor count: {count}")))
}

#[async_trait]
impl DoctorRepository for DieselDoctorRepository {
    async fn insert(&self, doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = new_row(Uuid::new_v4(), doctor);
        let stored = diesel::insert_into(doctors::table)
            .values(&row)
            .returning(DoctorRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert doctor"))?;

        debug!(doctor_id = %stored.id, "doctor inserted");
        row_to_doctor(stored)
    }

    async fn count(&self, criteria: &DoctorCriteria) -> Result<u64, DoctorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = filtered(criteria)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count doctors"))?;

        count_to_u64(total)
    }

    async fn find_page(
        &self,
        criteria: &DoctorCriteria,
        order: &SortOrder,
        window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DoctorRow> = page_query(criteria, order, window)
            .select(DoctorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "load doctors"))?;

        rows.into_iter().map(row_to_doctor).collect()
    }
}
