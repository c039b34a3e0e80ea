use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::snapshot::Side;
use nalgebra::Vector3;

const BALL_PULL: f32 = 0.4; // Depth interpolation from own goal toward the ball
const LATERAL_PULL: f32 = 0.7; // Lateral interpolation from goal center toward the ball
const LINE_SPACING: f32 = 900.0; // Lateral gap between adjacent back-line slots
const GOAL_CLEARANCE: f32 = 800.0; // The line never drops closer to the goal than this
const MIDFIELD_CLEARANCE: f32 = 300.0; // The line never pushes past midfield minus this
const TOUCHLINE_MARGIN: f32 = 200.0;

/// Back-line slot for one defender: compresses toward the ball while
/// preserving lateral spacing, never collapses to a point, never leaves the
/// field. Numbers outside the defender set sit on the line's center.
pub fn defensive_position(
    ball: &Vector3<f32>,
    goal_center: &Vector3<f32>,
    side: Side,
    number: u32,
    defenders: &[u32],
) -> Vector3<f32> {
    let mut line_x = goal_center.x + (ball.x - goal_center.x) * BALL_PULL;

    let midfield_x = FIELD_WIDTH / 2.0;
    match side {
        Side::Home => {
            line_x = line_x.min(midfield_x - MIDFIELD_CLEARANCE);
            line_x = line_x.max(goal_center.x + GOAL_CLEARANCE);
        }
        Side::Away => {
            line_x = line_x.max(midfield_x + MIDFIELD_CLEARANCE);
            line_x = line_x.min(goal_center.x - GOAL_CLEARANCE);
        }
    }

    let center_y = goal_center.y + (ball.y - goal_center.y) * LATERAL_PULL;
    let offset = lateral_offset(number, defenders) * side.attack_sign();

    let line_y = (center_y + offset * LINE_SPACING)
        .clamp(TOUCHLINE_MARGIN, FIELD_HEIGHT - TOUCHLINE_MARGIN);

    Vector3::new(line_x.round(), line_y.round(), 0.0)
}

/// Offset multiple for `number`'s slot: slots spread symmetrically around
/// the line center in ascending number order ((-1.5, -0.5, 0.5, 1.5) for a
/// four-man line).
fn lateral_offset(number: u32, defenders: &[u32]) -> f32 {
    let mut sorted = defenders.to_vec();
    sorted.sort_unstable();

    match sorted.iter().position(|&n| n == number) {
        Some(index) => index as f32 - (sorted.len() as f32 - 1.0) / 2.0,
        None => 0.0,
    }
}
