use nalgebra::Vector3;

/// Field and object dimensions, in field units. One playing field is
/// 20000 x 10000 with goals centered on the vertical axis.
pub const FIELD_WIDTH: f32 = 20000.0;
pub const FIELD_HEIGHT: f32 = 10000.0;

pub const GOAL_WIDTH: f32 = 3000.0;
pub const GOAL_MIN_Y: f32 = (FIELD_HEIGHT - GOAL_WIDTH) / 2.0;
pub const GOAL_MAX_Y: f32 = (FIELD_HEIGHT + GOAL_WIDTH) / 2.0;

/// Radius of the zone in front of each goal reserved for the goalkeeper.
pub const GOAL_ZONE_RANGE: f32 = 1400.0;

pub const PLAYER_SIZE: f32 = 400.0;
pub const BALL_SIZE: f32 = 200.0;

/// Speed lost by a rolling ball on each simulation step.
pub const BALL_DECELERATION: f32 = 10.0;

#[inline]
pub fn field_center() -> Vector3<f32> {
    Vector3::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0, 0.0)
}
