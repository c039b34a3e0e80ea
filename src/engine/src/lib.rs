pub mod constants;
pub mod engine;
pub mod home;
pub mod snapshot;
pub mod strategies;
pub mod vector;

pub use engine::{Command, DecisionEngine, DecisionError, EngineConfig, ShotPolicy, TickContext, decide_all};
pub use home::{FixedHomePositions, HomePositionProvider};
pub use snapshot::{Agent, Ball, GOALKEEPER_NUMBER, GameSnapshot, Goal, PossessionRole, Side, Velocity};
pub use strategies::{PlayerState, StateHandler};
pub use vector::VectorExtensions;

#[cfg(test)]
pub(crate) mod testing;
