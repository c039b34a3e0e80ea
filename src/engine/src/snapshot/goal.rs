use crate::constants::{FIELD_WIDTH, GOAL_MAX_Y, GOAL_MIN_Y};
use crate::snapshot::Side;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One goal mouth: two pole endpoints on a goal line. The top pole is the
/// one with the larger y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    top_pole: Vector3<f32>,
    bottom_pole: Vector3<f32>,
}

impl Goal {
    pub fn new(top_pole: Vector3<f32>, bottom_pole: Vector3<f32>) -> Self {
        Goal {
            top_pole,
            bottom_pole,
        }
    }

    /// The goal defended by `side`. Home defends the x = 0 line.
    pub fn defense(side: Side) -> Goal {
        match side {
            Side::Home => Goal::on_line(0.0),
            Side::Away => Goal::on_line(FIELD_WIDTH),
        }
    }

    /// The goal attacked by `side`.
    pub fn attack(side: Side) -> Goal {
        Goal::defense(side.opposite())
    }

    fn on_line(x: f32) -> Goal {
        Goal {
            top_pole: Vector3::new(x, GOAL_MAX_Y, 0.0),
            bottom_pole: Vector3::new(x, GOAL_MIN_Y, 0.0),
        }
    }

    #[inline]
    pub fn top_pole(&self) -> Vector3<f32> {
        self.top_pole
    }

    #[inline]
    pub fn bottom_pole(&self) -> Vector3<f32> {
        self.bottom_pole
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.top_pole + self.bottom_pole) / 2.0
    }
}
