use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::outlet::StdoutOutlet;
use crate::generator::research::orchestrator::ResearchOutcome;
use crate::generator::research::spawn_research;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// 时间跟踪作用域，阶段按结束顺序记录
pub struct TimingScope {
    start_time: Instant,
    phase_start_times: HashMap<String, Instant>,
    phase_durations: Vec<(String, Duration)>,
}

impl Default for TimingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase_start_times: HashMap::new(),
            phase_durations: Vec::new(),
        }
    }

    /// 开始一个新的阶段计时
    pub fn start_phase(&mut self, phase_name: &str) {
        self.phase_start_times
            .insert(phase_name.to_string(), Instant::now());
    }

    /// 结束一个阶段的计时，未开始的阶段返回 None
    pub fn end_phase(&mut self, phase_name: &str) -> Option<Duration> {
        let start_time = self.phase_start_times.remove(phase_name)?;
        let duration = start_time.elapsed();
        self.phase_durations
            .push((phase_name.to_string(), duration));
        Some(duration)
    }

    /// 获取总执行时间
    pub fn get_total_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 获取所有阶段的执行时间
    pub fn get_phase_durations(&self) -> &[(String, Duration)] {
        &self.phase_durations
    }

    /// 获取格式化的执行时间报告
    pub fn generate_timing_report(&self) -> String {
        let mut report = format!(
            "总执行时间: {:.2}秒\n",
            self.get_total_duration().as_secs_f64()
        );

        if !self.phase_durations.is_empty() {
            report.push_str("\n各阶段执行时间:\n");
            for (phase, duration) in &self.phase_durations {
                report.push_str(&format!("- {}: {:.3}秒\n", phase, duration.as_secs_f64()));
            }
        }

        report
    }
}

/// 调研计时的阶段键，单个工具以工具名计时
pub struct ResearchPhases;

impl ResearchPhases {
    pub const TOOLS: &'static str = "tools";
    pub const SYNTHESIZE: &'static str = "synthesize";
    pub const ENHANCE: &'static str = "enhance";
}

/// 进程运行方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    /// 启动HTTP服务
    Serve,
    /// 调研一个目的地，事件写到标准输出后退出
    Once(String),
}

/// 启动服务或执行单次调研
pub async fn launch(config: &Config, mode: LaunchMode) -> Result<()> {
    let context = GeneratorContext::new(config.clone())?;

    match mode {
        LaunchMode::Serve => crate::server::serve(context).await,
        LaunchMode::Once(destination) => {
            let outcome = spawn_research(context, destination, Arc::new(StdoutOutlet))
                .await
                .context("调研任务未能结束")?;
            match outcome {
                Some(ResearchOutcome::Completed(guide)) => {
                    info!("📘 已生成 {} 的旅行指南", guide.destination)
                }
                Some(ResearchOutcome::Rejected) => anyhow::bail!("Destination is required"),
                Some(ResearchOutcome::Cancelled) => info!("调研已取消"),
                None => anyhow::bail!("Research failed"),
            }
            Ok(())
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
