#[cfg(test)]
mod tests {
    use horas::libs::config::{Config, WorkdayDefaults};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for the save/read test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config_has_no_workday_section() {
        let config = Config::default();
        assert!(config.workday.is_none());
    }

    #[test]
    fn test_workday_defaults() {
        let defaults = WorkdayDefaults::default();
        assert_eq!(defaults.start, "09:00:00");
        assert_eq!(defaults.end, "18:00:00");
    }

    #[test]
    fn test_workday_defaults_fall_back_when_unset() {
        let config = Config::default();
        assert_eq!(config.workday_defaults(), WorkdayDefaults::default());
    }

    #[test]
    fn test_workday_defaults_prefer_configured_values() {
        let config = Config {
            workday: Some(WorkdayDefaults {
                start: "08:30:00".to_string(),
                end: "17:15:00".to_string(),
            }),
        };

        let defaults = config.workday_defaults();
        assert_eq!(defaults.start, "08:30:00");
        assert_eq!(defaults.end, "17:15:00");
    }

    #[test]
    fn test_default_config_serializes_to_empty_object() {
        // Unset sections stay out of the file entirely
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_save_read_cycle(_ctx: &mut ConfigTestContext) {
        // Reading before any save falls back to the default config
        let initial = Config::read().unwrap();
        assert!(initial.workday.is_none());

        let config = Config {
            workday: Some(WorkdayDefaults {
                start: "08:30:00".to_string(),
                end: "17:15:00".to_string(),
            }),
        };
        config.save().unwrap();

        let read_back = Config::read().unwrap();
        assert_eq!(read_back, config);
    }
}
