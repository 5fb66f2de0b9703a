//! Translate store-neutral listing queries into Diesel boxed queries.
//!
//! Text containment uses `ILIKE` with escaped wildcards, specialty compares
//! lowercased values, and every ordering ends with the primary key so page
//! boundaries do not shift between requests.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Text;
use pagination::PageRequest;

use crate::domain::{DoctorCriteria, SortDirection, SortField, SortOrder};

use super::schema::doctors;

define_sql_function!(fn lower(x: Text) -> Text);

/// Boxed `SELECT` over `doctors` with the table's default selection.
pub(crate) type DoctorQuery = doctors::BoxedQuery<'static, Pg>;

/// Escape `LIKE` metacharacters so user text matches literally.
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

/// Apply every criterion with AND semantics.
pub(crate) fn filtered(criteria: &DoctorCriteria) -> DoctorQuery {
    let mut query = doctors::table.into_boxed();

    if let Some(name) = &criteria.name_contains {
        query = query.filter(doctors::name.ilike(contains_pattern(name)));
    }
    if let Some(specialty) = &criteria.specialty {
        query = query.filter(lower(doctors::specialty).eq(specialty.to_lowercase()));
    }
    if let Some(city) = &criteria.city_contains {
        query = query.filter(doctors::city.ilike(contains_pattern(city)));
    }
    if let Some(gender) = criteria.gender {
        query = query.filter(doctors::gender.eq(gender.as_str()));
    }
    if let Some(min) = criteria.experience_min {
        query = query.filter(doctors::experience.ge(min));
    }
    if let Some(max) = criteria.experience_max {
        query = query.filter(doctors::experience.le(max));
    }
    if let Some(min) = criteria.rating_min {
        query = query.filter(doctors::rating.ge(min));
    }

    query
}

/// Append the sort keys in priority order.
pub(crate) fn ordered(mut query: DoctorQuery, order: &SortOrder) -> DoctorQuery {
    for &(field, direction) in order.keys() {
        query = match (field, direction) {
            (SortField::Name, SortDirection::Ascending) => query.then_order_by(doctors::name.asc()),
            (SortField::Name, SortDirection::Descending) => {
                query.then_order_by(doctors::name.desc())
            }
            (SortField::Experience, SortDirection::Ascending) => {
                query.then_order_by(doctors::experience.asc())
            }
            (SortField::Experience, SortDirection::Descending) => {
                query.then_order_by(doctors::experience.desc())
            }
            (SortField::Rating, SortDirection::Ascending) => {
                query.then_order_by(doctors::rating.asc())
            }
            (SortField::Rating, SortDirection::Descending) => {
                query.then_order_by(doctors::rating.desc())
            }
            (SortField::Id, SortDirection::Ascending) => query.then_order_by(doctors::id.asc()),
            (SortField::Id, SortDirection::Descending) => query.then_order_by(doctors::id.desc()),
        };
    }
    query
}

/// Restrict the query to one page.
pub(crate) fn windowed(query: DoctorQuery, window: PageRequest) -> DoctorQuery {
    let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);
    query.limit(i64::from(window.limit())).offset(offset)
}

/// Filtered, ordered and windowed page query.
pub(crate) fn page_query(
    criteria: &DoctorCriteria,
    order: &SortOrder,
    window: PageRequest,
) -> DoctorQuery {
    windowed(ordered(filtered(criteria), order), window)
}
