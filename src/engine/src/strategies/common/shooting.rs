use crate::constants::{BALL_SIZE, PLAYER_SIZE};
use crate::snapshot::{Agent, Goal};
use crate::vector::VectorExtensions;
use nalgebra::Vector3;

const KEEPER_REACH_FACTOR: f32 = 1.5; // Vertical band the keeper covers around itself

/// Aim point for a shot on `goal`, picked against the opposing goalkeeper.
///
/// The candidates sit just inside each pole, inset by one ball size so the
/// shot stays in-bounds. A candidate outside the keeper's reach scores by
/// how much farther the keeper is from it than the shooter; covered
/// candidates are ineligible. Both covered falls back to the goal center,
/// no known keeper falls back to the top pole.
pub fn best_shot_target(
    shooter: &Vector3<f32>,
    goal: &Goal,
    keeper: Option<&Agent>,
) -> Vector3<f32> {
    let top_pole = goal.top_pole();
    let bottom_pole = goal.bottom_pole();

    let Some(keeper) = keeper else {
        return top_pole;
    };

    let target_top = Vector3::new(top_pole.x, (top_pole.y - BALL_SIZE).round(), 0.0);
    let target_bottom = Vector3::new(bottom_pole.x, (bottom_pole.y + BALL_SIZE).round(), 0.0);

    let keeper_reach = PLAYER_SIZE * KEEPER_REACH_FACTOR;
    let top_is_clear = target_top.y > keeper.position.y + keeper_reach;
    let bottom_is_clear = target_bottom.y < keeper.position.y - keeper_reach;

    let score_top = candidate_score(shooter, &keeper.position, &target_top, top_is_clear);
    let score_bottom = candidate_score(shooter, &keeper.position, &target_bottom, bottom_is_clear);

    if score_top <= 0.0 && score_bottom <= 0.0 {
        return goal.center();
    }

    if score_top >= score_bottom {
        target_top
    } else {
        target_bottom
    }
}

/// Keeper-distance over shooter-distance, or -1 when the candidate is
/// covered or the shooter stands on it (the denominator must stay nonzero).
fn candidate_score(
    shooter: &Vector3<f32>,
    keeper: &Vector3<f32>,
    candidate: &Vector3<f32>,
    is_clear: bool,
) -> f32 {
    if !is_clear {
        return -1.0;
    }

    let shooter_distance = shooter.distance_to(candidate);
    if shooter_distance == 0.0 {
        return -1.0;
    }

    keeper.distance_to(candidate) / shooter_distance
}
