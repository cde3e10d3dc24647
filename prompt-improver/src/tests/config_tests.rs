//! Tests for configuration providers and remote configuration loading

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env;
    use std::time::Duration;

    use crate::config::{
        CompositeConfigProvider, ConfigProvider, ConfigProviderExt, EnvConfigProvider,
        MemoryConfigProvider, RemoteConfig, ServiceConfig, DEFAULT_BASE_URL,
    };
    use crate::error::ImproveError;

    #[test]
    fn test_env_config_provider() {
        // Unique names so parallel tests do not collide
        env::set_var("PI_CFG_TEST_BASE_URL", "https://env.example.com");
        env::set_var("PI_CFG_TEST_TIMEOUT", "250ms");
        env::set_var("PI_CFG_TEST_ENABLED", "yes");

        let provider = EnvConfigProvider::new().with_prefix("PI_CFG").with_namespace("TEST");

        assert_eq!(provider.get_string("base_url").unwrap(), "https://env.example.com");
        assert_eq!(provider.get_duration("timeout").unwrap(), Duration::from_millis(250));
        assert!(provider.get_bool("enabled").unwrap());
        assert!(matches!(
            provider.get_string("missing"),
            Err(ImproveError::Configuration(_))
        ));
        assert_eq!(provider.get_string_or("missing", "fallback"), "fallback");

        env::remove_var("PI_CFG_TEST_BASE_URL");
        env::remove_var("PI_CFG_TEST_TIMEOUT");
        env::remove_var("PI_CFG_TEST_ENABLED");
    }

    #[test]
    fn test_composite_config_provider_precedence() {
        let mut first = MemoryConfigProvider::new();
        first.set("base_url", "https://first.example.com");

        let mut second = MemoryConfigProvider::new();
        second.set("base_url", "https://second.example.com");
        second.set("timeout", "30");

        let provider = CompositeConfigProvider::new()
            .with_provider(first)
            .with_provider(second);

        assert_eq!(provider.get_string("base_url").unwrap(), "https://first.example.com");
        assert_eq!(provider.get_int("timeout").unwrap(), 30);
        assert!(provider.get_string("nothing").is_err());
        assert_eq!(provider.get_int_or("nothing", 7), 7);
    }

    #[test]
    fn test_remote_config_from_provider() {
        let provider = MemoryConfigProvider::with_values(HashMap::from([
            ("base_url".to_string(), "http://localhost:8080/v1/".to_string()),
            ("timeout".to_string(), "5s".to_string()),
        ]));

        let config = RemoteConfig::from_provider(&provider).unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/v1/");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            config.endpoint("chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(config.service_name(), "perplexity");
    }

    #[test]
    fn test_remote_config_rejects_bad_values() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("timeout", "soon");
        assert!(matches!(
            RemoteConfig::from_provider(&provider),
            Err(ImproveError::Configuration(_))
        ));

        let mut provider = MemoryConfigProvider::new();
        provider.set("base_url", "not a url");
        assert!(RemoteConfig::from_provider(&provider).is_err());

        let mut provider = MemoryConfigProvider::new();
        provider.set("timeout", "0");
        assert!(RemoteConfig::from_provider(&provider).is_err());
    }

    #[test]
    fn test_remote_config_default_points_at_perplexity() {
        let config = RemoteConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.endpoint("chat/completions"),
            "https://api.perplexity.ai/chat/completions"
        );
    }
}
