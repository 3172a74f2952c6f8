pub mod context;
pub mod outlet;
pub mod research;
pub mod synthesize;
pub mod workflow;
