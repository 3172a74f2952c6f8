use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::types::guide::TravelGuide;

/// 调研阶段状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Active,
    Complete,
    Error,
}

/// 前端可见的调研阶段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchStep {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: StepStatus,
}

/// 工具调用状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCallStatus {
    Running,
    Complete,
    Error,
}

/// 工具调用信息，时间为毫秒级Unix时间戳
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallInfo {
    pub tool_name: String,
    pub start_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    pub status: ToolCallStatus,
}

/// 流式消息，序列化为 `{"type": ..., "data": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StreamMessage {
    Step {
        step: ResearchStep,
        #[serde(rename = "stepIndex")]
        step_index: usize,
    },
    ToolCall {
        #[serde(rename = "toolCall")]
        tool_call: ToolCallInfo,
    },
    Progress {
        progress: u8,
    },
    Complete {
        guide: Box<TravelGuide>,
    },
    Error {
        error: String,
    },
}

impl StreamMessage {
    pub fn error(message: impl Into<String>) -> Self {
        StreamMessage::Error {
            error: message.into(),
        }
    }

    pub fn progress(value: u8) -> Self {
        StreamMessage::Progress {
            progress: value.min(100),
        }
    }

    /// 消息类型名，与序列化后的 `type` 字段一致
    pub fn kind(&self) -> &'static str {
        match self {
            StreamMessage::Step { .. } => "step",
            StreamMessage::ToolCall { .. } => "tool_call",
            StreamMessage::Progress { .. } => "progress",
            StreamMessage::Complete { .. } => "complete",
            StreamMessage::Error { .. } => "error",
        }
    }

    /// 是否为终止消息（complete 或 error）
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StreamMessage::Complete { .. } | StreamMessage::Error { .. }
        )
    }

    /// 序列化为一行NDJSON（带换行符）
    pub fn to_line(&self) -> Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_error_message_wire_format() {
        let line = StreamMessage::error("Destination is required")
            .to_line()
            .unwrap();

        assert!(line.ends_with('\n'));
        let value: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(
            value,
            json!({ "type": "error", "data": { "error": "Destination is required" } })
        );
    }

    #[test]
    fn test_step_message_wire_format() {
        let message = StreamMessage::Step {
            step: ResearchStep {
                id: "overview".to_string(),
                name: "Researching destination".to_string(),
                description: "Gathering general information and context".to_string(),
                status: StepStatus::Active,
            },
            step_index: 1,
        };
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["type"], json!("step"));
        assert_eq!(value["data"]["stepIndex"], json!(1));
        assert_eq!(value["data"]["step"]["status"], json!("active"));
    }

    #[test]
    fn test_tool_call_message_wire_format() {
        let message = StreamMessage::ToolCall {
            tool_call: ToolCallInfo {
                tool_name: "get_weather".to_string(),
                start_time: 1_700_000_000_000,
                end_time: None,
                status: ToolCallStatus::Running,
            },
        };
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["type"], json!("tool_call"));
        assert_eq!(value["data"]["toolCall"]["toolName"], json!("get_weather"));
        assert_eq!(value["data"]["toolCall"]["status"], json!("running"));
        assert!(value["data"]["toolCall"].get("endTime").is_none());
        assert_eq!(message.kind(), "tool_call");
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(
            StreamMessage::progress(140),
            StreamMessage::Progress { progress: 100 }
        );
        assert!(!StreamMessage::progress(5).is_terminal());
        assert!(StreamMessage::error("x").is_terminal());
    }

    #[test]
    fn test_message_parses_back_from_line() {
        let line = StreamMessage::progress(42).to_line().unwrap();
        let parsed: StreamMessage = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed, StreamMessage::Progress { progress: 42 });
    }
}
