use crate::constants::FIELD_WIDTH;
use crate::snapshot::Side;
use nalgebra::Vector3;
use std::collections::HashMap;

/// External positional-assignment service: maps an agent number to its
/// expected home position for the current side. The real implementation
/// lives with the region mapper outside this crate; hosts inject whatever
/// they have.
pub trait HomePositionProvider {
    fn expected_position(&self, number: u32, side: Side) -> Vector3<f32>;
}

/// Table-backed provider. Positions are stored for the Home side and
/// mirrored along x for Away.
#[derive(Debug, Clone, Default)]
pub struct FixedHomePositions {
    positions: HashMap<u32, Vector3<f32>>,
}

impl FixedHomePositions {
    pub fn new(positions: HashMap<u32, Vector3<f32>>) -> Self {
        FixedHomePositions { positions }
    }

    pub fn insert(&mut self, number: u32, position: Vector3<f32>) {
        self.positions.insert(number, position);
    }
}

impl HomePositionProvider for FixedHomePositions {
    fn expected_position(&self, number: u32, side: Side) -> Vector3<f32> {
        let home = self
            .positions
            .get(&number)
            .copied()
            .unwrap_or_else(|| Vector3::new(FIELD_WIDTH / 2.0, 5000.0, 0.0));

        match side {
            Side::Home => home,
            Side::Away => Vector3::new(FIELD_WIDTH - home.x, home.y, 0.0),
        }
    }
}
