pub mod apis;
pub mod cache;
pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod memory;
pub mod reference;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use generator::context::GeneratorContext;
pub use generator::outlet::{MemoryOutlet, NdjsonChannelOutlet, ResearchOutlet, StdoutOutlet};
pub use generator::research::orchestrator::{ResearchOrchestrator, ResearchOutcome};
pub use generator::research::registry::ToolRegistry;
pub use generator::synthesize::synthesize;
pub use generator::workflow::{LaunchMode, launch};
pub use types::{StreamMessage, ToolName, ToolResult, TravelGuide};
