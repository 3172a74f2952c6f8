pub mod guide;
pub mod step;
pub mod tool;

pub use guide::TravelGuide;
pub use step::{ResearchStep, StepStatus, StreamMessage, ToolCallInfo, ToolCallStatus};
pub use tool::{ToolName, ToolResult};
