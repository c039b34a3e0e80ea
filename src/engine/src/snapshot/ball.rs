use crate::constants::BALL_DECELERATION;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Wire-level velocity: a unit direction and a scalar speed. The transport
/// layer delivers both; speed is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub direction: Vector3<f32>,
    pub speed: f32,
}

impl Velocity {
    pub fn new(direction: Vector3<f32>, speed: f32) -> Self {
        Velocity { direction, speed }
    }

    pub fn zero() -> Self {
        Velocity {
            direction: Vector3::zeros(),
            speed: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector3<f32>,
    pub velocity: Velocity,
}

impl Ball {
    pub fn new(position: Vector3<f32>, velocity: Velocity) -> Self {
        Ball { position, velocity }
    }

    pub fn stationary(position: Vector3<f32>) -> Self {
        Ball {
            position,
            velocity: Velocity::zero(),
        }
    }

    /// Position after `steps` simulation steps under constant deceleration.
    /// The ball loses `BALL_DECELERATION` of speed per step and advances by
    /// a hundredth of its remaining speed along its direction.
    pub fn forecast_position(&self, steps: usize) -> Vector3<f32> {
        let mut position = self.position;
        let mut speed = self.velocity.speed;

        for _ in 0..steps {
            speed = (speed - BALL_DECELERATION).max(0.0);
            position += self.velocity.direction * (speed / 100.0);
        }

        position
    }
}
