#[cfg(test)]
mod tests {
    use crate::config::{CacheConfig, Config, LLMConfig, LLMProvider, ResearchConfig};
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert!(config.http.user_agent.starts_with("YouTravel/1.0"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_http_timeouts_stay_within_adapter_bounds() {
        let config = Config::default();

        assert_eq!(config.http.fast_timeout(), Duration::from_secs(5));
        assert_eq!(config.http.default_timeout(), Duration::from_secs(10));
        assert_eq!(config.http.slow_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "Anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::OpenAI);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert!(!config.model.is_empty());
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.retry_attempts, 1);
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.min_summary_length, 40);
    }

    #[test]
    fn test_llm_config_usable_requires_key() {
        let mut config = LLMConfig {
            enabled: true,
            api_key: String::new(),
            ..LLMConfig::default()
        };
        assert!(!config.is_usable());

        config.api_key = "secret".to_string();
        assert!(config.is_usable());

        config.enabled = false;
        assert!(!config.is_usable());

        // Ollama 本地部署无需密钥
        config.enabled = true;
        config.api_key = String::new();
        config.provider = LLMProvider::Ollama;
        assert!(config.is_usable());
    }

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();

        assert!(config.enabled);
        assert_eq!(config.geocoding_hours, 24);
        assert_eq!(config.country_hours, 168); // 1 week
        assert_eq!(config.weather_hours, 1);
        assert_eq!(config.currency_hours, 1);
        assert!(config.climate_hours > config.weather_hours);
    }

    #[test]
    fn test_research_config_default() {
        let config = ResearchConfig::default();

        assert_eq!(config.step_delay_ms, 100);
        assert_eq!(config.attraction_radius_m, 20_000);
        assert_eq!(config.airport_radius_m, 100_000);
        assert_eq!(config.base_currency, "USD");
    }

    #[test]
    fn test_from_file_partial_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("youtravel.toml");

        let content = r#"
verbose = true

[server]
port = 8088

[research]
step_delay_ms = 0

[llm]
provider = "deepseek"
model = "deepseek-chat"
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert!(config.verbose);
        assert_eq!(config.server.port, 8088);
        // 未出现在文件中的字段保留默认值
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.research.step_delay_ms, 0);
        assert_eq!(config.research.base_currency, "USD");
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.model, "deepseek-chat");
        assert_eq!(config.llm.max_tokens, 500);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(&PathBuf::from("/nonexistent/youtravel.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        std::fs::write(&config_path, "[server\nport = ").unwrap();

        let result = Config::from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_endpoints_default() {
        let config = Config::default();

        assert!(config.apis.nominatim.starts_with("https://"));
        assert!(config.apis.overpass.ends_with("/interpreter"));
        assert!(config.apis.rest_countries.ends_with("/v3.1"));
    }
}
