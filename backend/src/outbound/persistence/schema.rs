//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Doctor directory entries.
    ///
    /// Rows are insert-only. The `id` column is the primary key (UUID v4).
    doctors (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name, including any title.
        name -> Text,
        specialty -> Text,
        /// `male` or `female`, enforced by a check constraint.
        gender -> Text,
        city -> Text,
        /// Years in practice.
        experience -> Float8,
        /// Between 0 and 5, enforced by a check constraint.
        rating -> Float8,
        /// Absolute profile image URL.
        image -> Text,
        hospital -> Nullable<Text>,
        /// Consultation fee.
        fee -> Float8,
        review_count -> Nullable<Float8>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
