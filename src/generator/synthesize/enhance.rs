//! 可选的LLM润色：只改写概览摘要，失败时保留原文

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::llm::client::LLMClient;
use crate::types::TravelGuide;

/// 短于此长度的摘要不值得改写
const MIN_INPUT_LENGTH: usize = 20;

const SYSTEM_PROMPT: &str = "You are a travel writer. Rewrite destination summaries so they are \
vivid, accurate and concise. Keep every fact from the input, do not invent new facts, \
and reply with the rewritten summary only.";

/// 摘要改写器
#[async_trait]
pub trait SummaryRewriter: Send + Sync {
    async fn rewrite(&self, destination: &str, summary: &str) -> Result<String>;
}

#[async_trait]
impl SummaryRewriter for LLMClient {
    async fn rewrite(&self, destination: &str, summary: &str) -> Result<String> {
        let user_prompt = format!(
            "Destination: {}\n\nSummary:\n{}\n\nRewrite this summary in 2-4 sentences.",
            destination, summary
        );
        self.prompt(SYSTEM_PROMPT, &user_prompt).await
    }
}

#[derive(Clone)]
pub struct SummaryEnhancer {
    rewriter: Arc<dyn SummaryRewriter>,
    min_length: usize,
}

impl SummaryEnhancer {
    pub fn new(rewriter: Arc<dyn SummaryRewriter>, min_length: usize) -> Self {
        Self {
            rewriter,
            min_length,
        }
    }

    /// 尝试润色概览摘要，返回是否采用了新文本
    pub async fn enhance(&self, guide: &mut TravelGuide) -> bool {
        let original = guide.overview.summary.trim();
        if original.chars().count() < MIN_INPUT_LENGTH {
            debug!("摘要过短，跳过润色");
            return false;
        }

        match self.rewriter.rewrite(&guide.destination, original).await {
            Ok(rewritten) => {
                let rewritten = rewritten.trim();
                if rewritten.chars().count() < self.min_length {
                    warn!("⚠️ 润色结果过短({}字符)，保留原摘要", rewritten.chars().count());
                    return false;
                }
                info!("✨ 概览摘要已润色");
                guide.overview.summary = rewritten.to_string();
                true
            }
            Err(e) => {
                warn!("⚠️ 摘要润色失败，保留原摘要: {:#}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::synthesize::synthesize;
    use crate::memory::CollectedData;
    use anyhow::bail;

    struct Fixed(&'static str);

    #[async_trait]
    impl SummaryRewriter for Fixed {
        async fn rewrite(&self, _destination: &str, _summary: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    #[async_trait]
    impl SummaryRewriter for Broken {
        async fn rewrite(&self, _destination: &str, _summary: &str) -> Result<String> {
            bail!("provider timeout")
        }
    }

    fn guide() -> TravelGuide {
        synthesize("Lisbon", &CollectedData::new())
    }

    #[tokio::test]
    async fn test_accepts_long_enough_rewrite() {
        let enhancer = SummaryEnhancer::new(
            Arc::new(Fixed("  Lisbon spills down seven hills to the Tagus river.  ")),
            20,
        );
        let mut guide = guide();

        assert!(enhancer.enhance(&mut guide).await);
        assert_eq!(
            guide.overview.summary,
            "Lisbon spills down seven hills to the Tagus river."
        );
    }

    #[tokio::test]
    async fn test_short_rewrite_keeps_original() {
        let enhancer = SummaryEnhancer::new(Arc::new(Fixed("Nice.")), 20);
        let mut guide = guide();
        let original = guide.overview.summary.clone();

        assert!(!enhancer.enhance(&mut guide).await);
        assert_eq!(guide.overview.summary, original);
    }

    #[tokio::test]
    async fn test_failure_keeps_original() {
        let enhancer = SummaryEnhancer::new(Arc::new(Broken), 20);
        let mut guide = guide();
        let original = guide.overview.summary.clone();

        assert!(!enhancer.enhance(&mut guide).await);
        assert_eq!(guide.overview.summary, original);
    }

    #[tokio::test]
    async fn test_tiny_summary_is_not_sent() {
        let enhancer = SummaryEnhancer::new(Arc::new(Broken), 20);
        let mut guide = guide();
        guide.overview.summary = "Short".to_string();

        assert!(!enhancer.enhance(&mut guide).await);
        assert_eq!(guide.overview.summary, "Short");
    }
}
