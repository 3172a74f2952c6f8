#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use crate::generator::workflow::LaunchMode;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["youtravel"]).unwrap();

        assert!(args.config.is_none());
        assert!(args.destination.is_none());
        assert!(!args.no_cache);
        assert!(!args.no_llm);
        assert!(!args.verbose);
        assert_eq!(args.launch_mode(), LaunchMode::Serve);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from(["youtravel", "-p", "8080", "-d", "Kyoto", "-v"]).unwrap();

        assert_eq!(args.port, Some(8080));
        assert!(args.verbose);
        assert_eq!(args.launch_mode(), LaunchMode::Once("Kyoto".to_string()));
    }

    #[test]
    fn test_log_filter_follows_verbose_flag() {
        let quiet = Args::try_parse_from(["youtravel", "--llm-provider", "mystery"]).unwrap();
        assert_eq!(quiet.default_log_filter(), "youtravel=info");

        let verbose = Args::try_parse_from(["youtravel", "--verbose"]).unwrap();
        assert_eq!(verbose.default_log_filter(), "youtravel=debug");
    }

    #[test]
    fn test_args_long_options() {
        let args = Args::try_parse_from([
            "youtravel",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--no-cache",
            "--step-delay-ms",
            "0",
            "--unsplash-access-key",
            "unsplash-key",
        ])
        .unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert!(!config.cache.enabled);
        assert_eq!(config.research.step_delay_ms, 0);
        assert_eq!(
            config.apis.unsplash_access_key.as_deref(),
            Some("unsplash-key")
        );
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from([
            "youtravel",
            "--llm-provider",
            "anthropic",
            "--llm-api-key",
            "test-key",
            "--llm-api-base-url",
            "https://api.example.com",
            "--llm-model",
            "claude-test",
        ])
        .unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.llm.provider, LLMProvider::Anthropic);
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.llm.api_base_url, "https://api.example.com");
        assert_eq!(config.llm.model, "claude-test");
        assert!(config.llm.enabled);
    }

    #[test]
    fn test_no_llm_wins_over_key() {
        let args =
            Args::try_parse_from(["youtravel", "--llm-api-key", "test-key", "--no-llm"]).unwrap();

        let config = args.into_config().unwrap();
        assert!(!config.llm.enabled);
        assert!(!config.llm.is_usable());
    }

    #[test]
    fn test_unknown_provider_keeps_default() {
        let args = Args::try_parse_from(["youtravel", "--llm-provider", "mystery"]).unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 4000\nhost = \"0.0.0.0\"\n\n[research]\nstep_delay_ms = 250"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = Args::try_parse_from(["youtravel", "-c", path.as_str(), "--port", "5000"]).unwrap();
        let config = args.into_config().unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.research.step_delay_ms, 250);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["youtravel", "-c", "/nonexistent/youtravel.toml"]).unwrap();

        assert!(args.into_config().is_err());
    }
}
