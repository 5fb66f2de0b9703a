//! Store-neutral listing query derived from a [`DoctorFilter`].
//!
//! Outbound adapters translate these types into their native query
//! language. All criteria are combined with AND.

use pagination::PageRequest;

use super::{DoctorFilter, Gender, SortKey};

/// Filtering constraints, each optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorCriteria {
    /// Case-insensitive substring of the name.
    pub name_contains: Option<String>,
    /// Case-insensitive exact specialty.
    pub specialty: Option<String>,
    /// Case-insensitive substring of the city.
    pub city_contains: Option<String>,
    /// Exact gender.
    pub gender: Option<Gender>,
    /// Inclusive lower bound on experience.
    pub experience_min: Option<f64>,
    /// Inclusive upper bound on experience.
    pub experience_max: Option<f64>,
    /// Inclusive lower bound on rating.
    pub rating_min: Option<f64>,
}

impl DoctorCriteria {
    /// Extract the constraints from a filter.
    #[must_use]
    pub fn from_filter(filter: &DoctorFilter) -> Self {
        Self {
            name_contains: filter.search().map(str::to_owned),
            specialty: filter.specialty().map(str::to_owned),
            city_contains: filter.city().map(str::to_owned),
            gender: filter.gender(),
            experience_min: filter.experience_min(),
            experience_max: filter.experience_max(),
            rating_min: filter.rating_min(),
        }
    }

    /// Whether no constraint is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// A sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Experience,
    Rating,
    /// Store identifier; always the last key so pages are stable.
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordered list of sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder(Vec<(SortField, SortDirection)>);

impl SortOrder {
    /// Sort keys for a requested ordering.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{SortDirection, SortField, SortKey, SortOrder};
    ///
    /// let order = SortOrder::for_key(SortKey::Relevance);
    /// assert_eq!(
    ///     order.keys(),
    ///     &[
    ///         (SortField::Rating, SortDirection::Descending),
    ///         (SortField::Experience, SortDirection::Descending),
    ///         (SortField::Id, SortDirection::Ascending),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn for_key(key: SortKey) -> Self {
        use SortDirection::{Ascending, Descending};

        let mut keys = match key {
            SortKey::Experience => vec![(SortField::Experience, Descending)],
            SortKey::Rating => vec![(SortField::Rating, Descending)],
            SortKey::Name => vec![(SortField::Name, Ascending)],
            SortKey::Relevance => vec![
                (SortField::Rating, Descending),
                (SortField::Experience, Descending),
            ],
        };
        keys.push((SortField::Id, Ascending));
        Self(keys)
    }

    /// Keys in priority order.
    #[must_use]
    pub fn keys(&self) -> &[(SortField, SortDirection)] {
        self.0.as_slice()
    }
}

/// Everything a store needs to answer one listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorQuery {
    pub criteria: DoctorCriteria,
    pub order: SortOrder,
    pub window: PageRequest,
}

impl From<&DoctorFilter> for DoctorQuery {
    fn from(filter: &DoctorFilter) -> Self {
        Self {
            criteria: DoctorCriteria::from_filter(filter),
            order: SortOrder::for_key(filter.sort_by()),
            window: filter.page_request(),
        }
    }
}
