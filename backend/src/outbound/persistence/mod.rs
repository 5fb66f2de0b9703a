//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the doctor repository behind the domain's `DoctorRepository`
//! port, backed by PostgreSQL via `diesel-async` and `bb8` connection
//! pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories translate between Diesel rows and
//!   domain types. Filtering rules live in the domain criteria and are only
//!   rendered to SQL here.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Lazy pooling**: the pool connects on first use, so the server starts
//!   while the database is down and the directory falls back to bundled data.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselDoctorRepository, PoolConfig};
//!
//! let pool = DbPool::lazy(&PoolConfig::new("postgres://localhost/doctors"));
//! let repo = DieselDoctorRepository::new(pool);
//! ```

pub(crate) mod diesel_helpers;
mod diesel_doctor_repository;
mod doctor_query_translator;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_doctor_repository::DieselDoctorRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
