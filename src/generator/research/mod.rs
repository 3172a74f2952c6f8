// 目的地调研：按固定顺序调用十二个直连工具，把成功结果累积到收集数据表，
// 最后合成旅行指南。所有进度都以流式事件发出。
//
// 阶段: init → overview(定位、国家) → cities → places → neighborhoods
//      → costs(预算、天气) → transport → safety → culture → tips → images → synthesize

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::generator::context::GeneratorContext;
use crate::generator::outlet::ResearchOutlet;
use crate::generator::research::orchestrator::{ResearchOrchestrator, ResearchOutcome};
use crate::types::StreamMessage;

pub mod orchestrator;
pub mod registry;
pub mod tasks;
pub mod tools;

/// 执行一次调研
pub async fn execute(
    context: &GeneratorContext,
    destination: &str,
    outlet: &dyn ResearchOutlet,
) -> Result<ResearchOutcome> {
    ResearchOrchestrator::new(context)
        .run(destination, outlet)
        .await
}

/// 在后台任务中执行调研
///
/// 调研任务异常退出时向输出端补发一条错误事件，流总以终止事件结尾，
/// 此时任务结果为 `None`。
pub fn spawn_research(
    context: GeneratorContext,
    destination: String,
    outlet: Arc<dyn ResearchOutlet>,
) -> JoinHandle<Option<ResearchOutcome>> {
    tokio::spawn(async move {
        let worker_outlet = outlet.clone();
        let worker = tokio::spawn(async move {
            execute(&context, &destination, worker_outlet.as_ref()).await
        });

        let message = match worker.await {
            Ok(Ok(outcome)) => return Some(outcome),
            Ok(Err(e)) => {
                warn!("⚠️ 调研中断: {:#}", e);
                e.to_string()
            }
            Err(e) => {
                error!("❌ 调研任务崩溃: {}", e);
                "Research failed unexpectedly".to_string()
            }
        };

        if !outlet.is_closed() {
            let _ = outlet.emit(StreamMessage::error(message)).await;
        }
        None
    })
}
