//! Startup wiring for example doctor seeding.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{SeedOutcome, StartupSeedingError, seed_doctors, seed_example_data_on_startup};
