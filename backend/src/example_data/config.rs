//! `EXAMPLE_DATA_*` settings for startup seeding.

use std::path::PathBuf;

use example_data::{RegistryError, SeedRegistry};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SEED_NAME: &str = "quiet-heron";

/// Seeding is opt-in; every other field has a usable default.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    #[ortho_config(default = false)]
    pub enabled: bool,
    pub seed_name: Option<String>,
    /// Overrides the seed's own doctor count.
    #[ortho_config(file_key = "doctor_count")]
    pub count: Option<usize>,
    /// Seed registry JSON; the registry shipped with `example-data` otherwise.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Seed to generate from, `quiet-heron` unless configured.
    #[must_use]
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Read the configured registry file, or the bundled one.
    ///
    /// # Errors
    /// Returns [`RegistryError`] when the file is unreadable or malformed.
    pub fn load_registry(&self) -> Result<SeedRegistry, RegistryError> {
        self.registry_path
            .as_deref()
            .map_or_else(SeedRegistry::bundled, SeedRegistry::from_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "EXAMPLE_DATA_ENABLED",
        "EXAMPLE_DATA_SEED_NAME",
        "EXAMPLE_DATA_COUNT",
        "EXAMPLE_DATA_REGISTRY_PATH",
    ];

    fn load_with(values: [Option<&str>; 4]) -> ExampleDataSettings {
        let _guard = lock_env(
            VARS.iter()
                .zip(values)
                .map(|(key, value)| (*key, value.map(str::to_owned))),
        );
        ExampleDataSettings::load_from_iter([OsString::from("backend")])
            .expect("settings load")
    }

    #[test]
    fn seeding_is_off_by_default() {
        let settings = load_with([None; 4]);
        assert!(!settings.is_enabled());
        assert_eq!(settings.seed_name(), "quiet-heron");
        assert_eq!(settings.count, None);
        assert_eq!(settings.registry_path, None);
    }

    #[test]
    fn environment_selects_seed_and_count() {
        let settings = load_with([
            Some("true"),
            Some("amber-lynx"),
            Some("7"),
            Some("/srv/seeds/doctors.json"),
        ]);
        assert!(settings.is_enabled());
        assert_eq!(settings.seed_name(), "amber-lynx");
        assert_eq!(settings.count, Some(7));
        assert_eq!(
            settings.registry_path.as_deref(),
            Some(std::path::Path::new("/srv/seeds/doctors.json"))
        );
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("/definitely/not/here/seeds.json"), false)]
    fn registry_source_follows_path(#[case] path: Option<&str>, #[case] loads: bool) {
        let settings = ExampleDataSettings {
            registry_path: path.map(PathBuf::from),
            ..ExampleDataSettings::default()
        };
        assert_eq!(settings.load_registry().is_ok(), loads);
    }
}
