//! In-memory doctor store and app wiring for directory integration tests.

use std::cmp::Ordering;
use std::sync::Mutex;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use pagination::PageRequest;

use backend::Trace;
use backend::domain::ports::{DoctorRepository, DoctorRepositoryError};
use backend::domain::{
    Doctor, DoctorCriteria, DoctorId, NewDoctor, NewDoctorDraft, SortDirection, SortField,
    SortOrder,
};
use backend::inbound::http::doctors::{add_doctor, list_doctors};
use backend::inbound::http::error::{api_not_found, json_error_handler, query_error_handler};
use backend::inbound::http::state::HttpState;

#[derive(Default)]
struct StoreState {
    doctors: Vec<Doctor>,
    next_id: u32,
    offline: bool,
}

/// Doctor store held in memory, applying criteria and order like the
/// PostgreSQL adapter does.
#[derive(Default)]
pub struct InMemoryDoctors {
    state: Mutex<StoreState>,
}

impl InMemoryDoctors {
    /// Simulate the store going away; every call fails with a connection error.
    pub fn go_offline(&self) {
        self.state.lock().expect("store lock").offline = true;
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, StoreState>, DoctorRepositoryError> {
        let state = self.state.lock().expect("store lock");
        if state.offline {
            return Err(DoctorRepositoryError::connection("connection refused"));
        }
        Ok(state)
    }
}

fn contains_folded(haystack: &str, needle: Option<&String>) -> bool {
    needle.is_none_or(|needle| haystack.to_lowercase().contains(&needle.to_lowercase()))
}

fn matches(doctor: &Doctor, criteria: &DoctorCriteria) -> bool {
    let profile = doctor.profile();
    contains_folded(profile.name(), criteria.name_contains.as_ref())
        && contains_folded(profile.city(), criteria.city_contains.as_ref())
        && criteria
            .specialty
            .as_ref()
            .is_none_or(|s| profile.specialty().to_lowercase() == s.to_lowercase())
        && criteria.gender.is_none_or(|g| profile.gender() == g)
        && criteria
            .experience_min
            .is_none_or(|min| profile.experience() >= min)
        && criteria
            .experience_max
            .is_none_or(|max| profile.experience() <= max)
        && criteria.rating_min.is_none_or(|min| profile.rating() >= min)
}

fn compare(a: &Doctor, b: &Doctor, order: &SortOrder) -> Ordering {
    order
        .keys()
        .iter()
        .map(|&(field, direction)| {
            let ordering = match field {
                SortField::Name => a.profile().name().cmp(b.profile().name()),
                SortField::Experience => a
                    .profile()
                    .experience()
                    .total_cmp(&b.profile().experience()),
                SortField::Rating => a.profile().rating().total_cmp(&b.profile().rating()),
                SortField::Id => a.id().as_ref().cmp(b.id().as_ref()),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl DoctorRepository for InMemoryDoctors {
    async fn insert(&self, doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError> {
        let mut state = self.guard()?;
        state.next_id += 1;
        let id = DoctorId::new(format!("doc-{:04}", state.next_id)).expect("non-empty id");
        let stored = doctor.clone().into_doctor(id);
        state.doctors.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self, criteria: &DoctorCriteria) -> Result<u64, DoctorRepositoryError> {
        let state = self.guard()?;
        let total = state.doctors.iter().filter(|d| matches(d, criteria)).count();
        Ok(u64::try_from(total).expect("count fits"))
    }

    async fn find_page(
        &self,
        criteria: &DoctorCriteria,
        order: &SortOrder,
        window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        let state = self.guard()?;
        let mut found: Vec<Doctor> = state
            .doctors
            .iter()
            .filter(|d| matches(d, criteria))
            .cloned()
            .collect();
        found.sort_by(|a, b| compare(a, b, order));
        let offset = usize::try_from(window.offset()).expect("offset fits");
        let limit = usize::try_from(window.limit()).expect("limit fits");
        Ok(found.into_iter().skip(offset).take(limit).collect())
    }
}

/// A valid draft; tests override fields with struct update syntax.
pub fn draft(name: &str, city: &str, gender: &str) -> NewDoctorDraft {
    NewDoctorDraft {
        name: name.to_owned(),
        specialty: "General Physician".to_owned(),
        gender: gender.to_owned(),
        city: city.to_owned(),
        experience: 10.0,
        rating: 4.0,
        image: "https://example.com/portrait.jpg".to_owned(),
        hospital: None,
        fee: 500.0,
        review_count: None,
    }
}

/// The directory routes as the server mounts them.
pub fn directory_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).wrap(Trace).service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(add_doctor)
            .service(list_doctors)
            .default_service(web::to(api_not_found)),
    )
}
