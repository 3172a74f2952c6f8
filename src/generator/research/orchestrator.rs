use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::generator::context::GeneratorContext;
use crate::generator::outlet::ResearchOutlet;
use crate::generator::research::registry::ToolRegistry;
use crate::generator::research::tasks::{STEPS, TASKS, TaskInput, research_step};
use crate::generator::synthesize::enhance::SummaryEnhancer;
use crate::generator::synthesize::synthesize;
use crate::generator::workflow::{ResearchPhases, TimingScope};
use crate::memory::CollectedData;
use crate::types::{StepStatus, StreamMessage, ToolCallInfo, ToolCallStatus, TravelGuide};

/// 初始化完成后的进度
const PROGRESS_STARTED: u8 = 5;
/// 工具阶段占用的进度区间 [10, 90]
const PROGRESS_TOOLS_FLOOR: f64 = 10.0;
const PROGRESS_TOOLS_SPAN: f64 = 80.0;
const PROGRESS_SYNTHESIZING: u8 = 95;
const PROGRESS_DONE: u8 = 100;

/// 单次调研的结局
#[derive(Debug)]
pub enum ResearchOutcome {
    /// 指南已生成并发出
    Completed(Box<TravelGuide>),
    /// 对端中途断开
    Cancelled,
    /// 请求无效，已发出错误事件
    Rejected,
}

/// 第 `done` 个工具完成后的进度
pub fn progress_for(done: usize, total: usize) -> u8 {
    if total == 0 {
        return PROGRESS_TOOLS_FLOOR as u8;
    }
    let ratio = done.min(total) as f64 / total as f64;
    (PROGRESS_TOOLS_FLOOR + ratio * PROGRESS_TOOLS_SPAN).round() as u8
}

/// 固定顺序的调研编排器
pub struct ResearchOrchestrator {
    registry: Arc<ToolRegistry>,
    enhancer: Option<Arc<SummaryEnhancer>>,
    step_delay: Duration,
    base_currency: String,
}

impl ResearchOrchestrator {
    pub fn new(context: &GeneratorContext) -> Self {
        Self {
            registry: context.registry.clone(),
            enhancer: context.enhancer.clone(),
            step_delay: Duration::from_millis(context.config.research.step_delay_ms),
            base_currency: context.config.research.base_currency.clone(),
        }
    }

    /// 执行一次完整调研，事件按顺序写入输出端
    ///
    /// 写出失败（对端断开）时返回错误，单个工具失败不会中断流程。
    pub async fn run(
        &self,
        destination: &str,
        outlet: &dyn ResearchOutlet,
    ) -> Result<ResearchOutcome> {
        let destination = destination.trim();
        if destination.is_empty() {
            outlet
                .emit(StreamMessage::error("Destination is required"))
                .await?;
            return Ok(ResearchOutcome::Rejected);
        }

        let run_id = uuid::Uuid::new_v4();
        let span = info_span!("research", run = %run_id, destination = %destination);
        self.run_pipeline(destination, outlet).instrument(span).await
    }

    async fn run_pipeline(
        &self,
        destination: &str,
        outlet: &dyn ResearchOutlet,
    ) -> Result<ResearchOutcome> {
        info!("🚀 开始调研目的地: {}", destination);
        let mut timing = TimingScope::new();
        let mut collected = CollectedData::new();

        outlet
            .emit(StreamMessage::Step {
                step: research_step(0, StepStatus::Active),
                step_index: 0,
            })
            .await?;
        outlet.emit(StreamMessage::progress(PROGRESS_STARTED)).await?;

        timing.start_phase(ResearchPhases::TOOLS);
        let mut current_step = 0;
        let total = TASKS.len();

        for (index, task) in TASKS.iter().enumerate() {
            if outlet.is_closed() {
                warn!("⚠️ 客户端已断开，停止调研");
                return Ok(ResearchOutcome::Cancelled);
            }

            if task.step_index > current_step {
                self.emit_step(outlet, current_step, StepStatus::Complete)
                    .await?;
                current_step = task.step_index;
                self.emit_step(outlet, current_step, StepStatus::Active)
                    .await?;
            }

            let args = (task.build_args)(&TaskInput {
                destination,
                collected: &collected,
                base_currency: &self.base_currency,
            });

            let start_time = Utc::now().timestamp_millis();
            outlet
                .emit(StreamMessage::ToolCall {
                    tool_call: ToolCallInfo {
                        tool_name: task.tool.to_string(),
                        start_time,
                        end_time: None,
                        status: ToolCallStatus::Running,
                    },
                })
                .await?;

            timing.start_phase(task.tool.as_str());
            let result = self.registry.invoke(task.tool, args).await;
            let elapsed = timing.end_phase(task.tool.as_str()).unwrap_or_default();

            let status = match result.into_data() {
                Ok(data) => {
                    info!("✅ {} 完成，耗时 {:.2}秒", task.tool, elapsed.as_secs_f64());
                    collected.store(task.tool, data);
                    ToolCallStatus::Complete
                }
                Err(error) => {
                    warn!("⚠️ {} 失败: {}", task.tool, error);
                    ToolCallStatus::Error
                }
            };

            outlet
                .emit(StreamMessage::ToolCall {
                    tool_call: ToolCallInfo {
                        tool_name: task.tool.to_string(),
                        start_time,
                        end_time: Some(Utc::now().timestamp_millis()),
                        status,
                    },
                })
                .await?;
            outlet
                .emit(StreamMessage::progress(progress_for(index + 1, total)))
                .await?;

            if !self.step_delay.is_zero() {
                tokio::time::sleep(self.step_delay).await;
            }
        }
        timing.end_phase(ResearchPhases::TOOLS);

        for step_index in current_step..STEPS.len() {
            self.emit_step(outlet, step_index, StepStatus::Complete)
                .await?;
        }

        outlet
            .emit(StreamMessage::progress(PROGRESS_SYNTHESIZING))
            .await?;

        timing.start_phase(ResearchPhases::SYNTHESIZE);
        let mut guide = synthesize(destination, &collected);
        timing.end_phase(ResearchPhases::SYNTHESIZE);

        if let Some(enhancer) = &self.enhancer {
            timing.start_phase(ResearchPhases::ENHANCE);
            enhancer.enhance(&mut guide).await;
            timing.end_phase(ResearchPhases::ENHANCE);
        }

        outlet.emit(StreamMessage::progress(PROGRESS_DONE)).await?;
        outlet
            .emit(StreamMessage::Complete {
                guide: Box::new(guide.clone()),
            })
            .await?;

        info!(
            "🎉 调研完成: {} 个工具成功 / 共 {} 个",
            collected.len(),
            total
        );
        debug!("\n{}", timing.generate_timing_report());

        Ok(ResearchOutcome::Completed(Box::new(guide)))
    }

    async fn emit_step(
        &self,
        outlet: &dyn ResearchOutlet,
        step_index: usize,
        status: StepStatus,
    ) -> Result<()> {
        outlet
            .emit(StreamMessage::Step {
                step: research_step(step_index, status),
                step_index,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let total = TASKS.len();
        let values: Vec<u8> = (1..=total).map(|done| progress_for(done, total)).collect();

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values[0] > PROGRESS_STARTED);
        assert_eq!(*values.last().unwrap(), 90);
        assert_eq!(progress_for(6, 12), 50);
        assert_eq!(progress_for(3, 0), 10);
    }
}
