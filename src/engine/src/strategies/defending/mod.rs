use crate::engine::{Command, DecisionError, TickContext};
use crate::strategies::common::team::defensive_position;
use crate::strategies::processor::StateHandler;

/// An opponent holds the ball: the teammate nearest to it presses, the back
/// line compresses toward the ball, everyone else recovers their home
/// position.
#[derive(Default)]
pub struct DefendingState {}

impl StateHandler for DefendingState {
    fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError> {
        let ball_position = ctx.ball().position();

        let closest = ctx
            .players()
            .teammates()
            .closest_to(&ball_position)
            .ok_or(DecisionError::EmptyTeam)?;

        if closest.number == ctx.me().number {
            // Press the holder, or the loose ball if no holder is known.
            let target = ctx
                .ball()
                .holder()
                .map(|holder| holder.position)
                .unwrap_or(ball_position);

            return Ok(vec![Command::move_to(target), Command::Catch]);
        }

        if ctx.is_defender(ctx.me().number) {
            let position = defensive_position(
                &ball_position,
                &ctx.defense_goal().center(),
                ctx.config.side,
                ctx.me().number,
                &ctx.config.defender_numbers,
            );

            return Ok(vec![Command::move_to(position)]);
        }

        Ok(vec![Command::move_to(ctx.expected_position())])
    }
}
