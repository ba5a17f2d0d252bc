#[cfg(test)]
mod integration_tests {
    use crate::config::load_config;
    use crate::overview::OverviewTemplate;
    use std::path::PathBuf;

    /// Test that the shipped YAML configuration loads and points at the shipped template
    #[test]
    fn test_overview_yaml_loading() {
        let config = load_config("configs/overview.yaml").unwrap();

        assert_eq!(
            config.template.path,
            Some(PathBuf::from("templates/overview.html"))
        );
        assert!(config.template.strict_undefined);
        assert_eq!(config.log_level, "info");
    }

    /// Test lenient configuration loading
    #[test]
    fn test_lenient_yaml_loading() {
        let config = load_config("configs/lenient.yaml").unwrap();

        assert_eq!(config.template.path, None);
        assert!(!config.template.strict_undefined);
        assert_eq!(config.log_level, "debug");
    }

    /// Test building a template from each shipped configuration
    #[test]
    fn test_template_from_yaml() {
        for file in ["configs/overview.yaml", "configs/lenient.yaml"] {
            let config = load_config(file).unwrap();
            let template = OverviewTemplate::from_config(&config.template).unwrap();

            assert_eq!(template.name(), "overview.html");
        }
    }
}
