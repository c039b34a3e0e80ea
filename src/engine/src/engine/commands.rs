use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One order submitted to the match server. All commands from the same tick
/// are applied simultaneously; their order carries no priority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move towards `target` at maximum speed.
    Move { target: Vector3<f32> },
    /// Kick the ball towards `target` at maximum speed.
    Kick { target: Vector3<f32> },
    /// Attempt to take the ball this tick.
    Catch,
}

impl Command {
    pub fn move_to(target: Vector3<f32>) -> Command {
        Command::Move { target }
    }

    pub fn kick_to(target: Vector3<f32>) -> Command {
        Command::Kick { target }
    }
}
