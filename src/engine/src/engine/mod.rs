pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;

pub use commands::Command;
pub use config::{EngineConfig, ShotPolicy};
pub use context::TickContext;
pub use engine::{DecisionEngine, decide_all};
pub use error::DecisionError;
