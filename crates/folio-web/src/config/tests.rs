#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_point_at_local_strapi() {
        let config = Config::default();
        assert_eq!(config.cms.base_url, "http://localhost:1337");
        assert_eq!(config.server.bind, "127.0.0.1:3001");
        assert_eq!(config.email.endpoint, folio_cms::delivery::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_default_static_dir_holds_the_stylesheet() {
        let config = Config::default();
        let css = std::path::Path::new(&config.server.static_dir).join("css/main.css");
        assert!(css.is_file(), "missing {}", css.display());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [email]
            service_id = "service_abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.email.service_id, "service_abc");
        assert_eq!(config.email.endpoint, folio_cms::delivery::DEFAULT_ENDPOINT);
        assert_eq!(config.cms.base_url, "http://localhost:1337");
    }

    #[test]
    fn test_env_overrides_win_and_blanks_are_ignored() {
        let env: HashMap<&str, &str> = [
            ("FOLIO_CMS_BASE_URL", "https://cms.example.com"),
            ("FOLIO_EMAILJS_SERVICE_ID", "service_env"),
            ("FOLIO_EMAILJS_TEMPLATE_ID", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::from_toml("[email]\ntemplate_id = \"template_file\"").unwrap();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.cms.base_url, "https://cms.example.com");
        assert_eq!(config.email.service_id, "service_env");
        assert_eq!(config.email.template_id, "template_file");
    }

    #[test]
    fn test_validate_strips_trailing_slash() {
        let mut config = Config::default();
        config.cms.base_url = "http://localhost:1337/".to_string();
        config.validate().unwrap();
        assert_eq!(config.cms.base_url, "http://localhost:1337");
    }

    #[test]
    fn test_validate_rejects_non_http_urls() {
        let mut config = Config::default();
        config.cms.base_url = "localhost:1337".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "cms.base_url", .. })
        ));

        let mut config = Config::default();
        config.email.endpoint = "ftp://mail.example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "email.endpoint", .. })
        ));
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        assert!(matches!(Config::from_toml("[cms"), Err(ConfigError::Parse(_))));
    }
}
