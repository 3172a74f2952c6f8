#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::generator::context::GeneratorContext;
    use crate::generator::workflow::{LaunchMode, TimingScope, launch};

    fn offline_config() -> Config {
        let mut config = Config::default();
        config.llm.enabled = false;
        config.research.step_delay_ms = 0;
        config
    }

    #[test]
    fn test_generator_context_creation() {
        let context = GeneratorContext::new(offline_config()).unwrap();

        assert_eq!(context.registry.len(), 12);
        assert!(context.enhancer.is_none());
        assert!(context.cache.is_empty());
    }

    #[test]
    fn test_llm_enhancer_requires_key() {
        let mut config = offline_config();
        config.llm.enabled = true;
        config.llm.api_key = String::new();

        let context = GeneratorContext::new(config).unwrap();
        assert!(context.enhancer.is_none());
    }

    #[test]
    fn test_timing_scope_records_phases_in_order() {
        let mut timing = TimingScope::new();
        timing.start_phase("search_destination");
        timing.start_phase("tools");
        timing.end_phase("search_destination");
        timing.end_phase("tools");

        let phases: Vec<&str> = timing
            .get_phase_durations()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(phases, vec!["search_destination", "tools"]);
        assert!(timing.end_phase("never_started").is_none());

        let report = timing.generate_timing_report();
        assert!(report.starts_with("总执行时间"));
        assert!(report.contains("- tools:"));
    }

    #[tokio::test]
    async fn test_once_mode_rejects_blank_destination() {
        let result = launch(&offline_config(), LaunchMode::Once("   ".to_string())).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Destination is required"));
    }
}
