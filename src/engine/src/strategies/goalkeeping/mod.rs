use crate::constants::{FIELD_WIDTH, field_center};
use crate::engine::{Command, DecisionError, TickContext};
use crate::snapshot::PossessionRole;
use crate::strategies::common::players::most_advanced;
use crate::strategies::processor::StateHandler;
use crate::vector::VectorExtensions;
use nalgebra::Vector3;

const KEEPER_PASS_RADIUS: f32 = 800.0; // Opponent-free radius around a distribution target
const FAR_BALL_DISTANCE: f32 = FIELD_WIDTH / 4.0;
const FORECAST_STEPS: usize = 3;

/// The goalkeeper's policy, active on every turn for number 1. With the
/// ball it distributes; otherwise it guards the goal line, shadowing the
/// ball's predicted lateral position between the posts. The small
/// oscillation keeps the keeper from going perfectly static.
#[derive(Default)]
pub struct GoalkeepingState {}

impl StateHandler for GoalkeepingState {
    fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError> {
        if ctx.snapshot.role == PossessionRole::Holding {
            return Ok(vec![self.distribute(ctx)]);
        }

        let goal = ctx.defense_goal();
        let goal_center = goal.center();
        let ball_position = ctx.ball().position();
        let jitter = ctx.jitter;

        if goal_center.distance_to(&ball_position) > FAR_BALL_DISTANCE {
            return Ok(vec![Command::move_to(goal_center + jitter)]);
        }

        let mut target_y = ball_position.y;
        if ctx.ball().speed() > 0.0 {
            target_y = ctx.ball().forecast_position(FORECAST_STEPS).y;
        }

        target_y = target_y.clamp(goal.bottom_pole().y, goal.top_pole().y);

        let target = Vector3::new(goal_center.x + jitter.x, target_y + jitter.y, 0.0);

        Ok(vec![Command::move_to(target), Command::Catch])
    }
}

impl GoalkeepingState {
    fn distribute(&self, ctx: &TickContext) -> Command {
        let free = ctx.players().teammates().free(KEEPER_PASS_RADIUS);

        match most_advanced(&free, ctx.config.side) {
            Some(receiver) => Command::kick_to(receiver.position),
            None => Command::kick_to(field_center()),
        }
    }
}
