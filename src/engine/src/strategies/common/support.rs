use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::snapshot::{Agent, Side};
use crate::strategies::common::players::in_field;
use crate::vector::VectorExtensions;
use nalgebra::Vector3;

const RING_RADIUS: f32 = 800.0; // Distance from the holder to each candidate
const RING_STEP_DEGREES: usize = 45;
const RETREAT_OFFSET: f32 = 500.0; // Fallback point behind the holder

/// Most open point on a ring around the ball holder: the in-field candidate
/// whose nearest opponent is farthest away. Ties keep the first candidate
/// in angular order, starting at 0 degrees.
///
/// When every candidate is out of the field the supporter retreats to a
/// point directly behind the holder along the attack axis.
pub fn support_position(
    holder: &Vector3<f32>,
    opponents: &[Agent],
    side: Side,
) -> Vector3<f32> {
    let mut best: Option<Vector3<f32>> = None;
    let mut best_opponent_distance = -1.0;

    for angle in (0..360).step_by(RING_STEP_DEGREES) {
        let radians = (angle as f32).to_radians();
        let candidate = Vector3::new(
            holder.x + RING_RADIUS * radians.cos(),
            holder.y + RING_RADIUS * radians.sin(),
            0.0,
        );

        if !in_field(&candidate, FIELD_WIDTH, FIELD_HEIGHT) {
            continue;
        }

        let closest_opponent = opponents
            .iter()
            .map(|opponent| candidate.distance_to(&opponent.position))
            .fold(f32::INFINITY, f32::min);

        if closest_opponent > best_opponent_distance {
            best_opponent_distance = closest_opponent;
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| {
        Vector3::new(
            holder.x - side.attack_sign() * RETREAT_OFFSET,
            holder.y,
            0.0,
        )
    })
}
