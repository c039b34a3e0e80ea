use crate::engine::{Command, DecisionError, TickContext};
use crate::strategies::common::support::support_position;
use crate::strategies::common::team::defensive_position;
use crate::strategies::processor::StateHandler;

const KEEPER_OUTLET_COUNT: usize = 4; // Closest teammates that offer for their keeper
const HOLDER_MARK_RADIUS: f32 = 900.0; // Pressure radius that triggers support runs
const SUPPORTER_COUNT: usize = 2; // Closest teammates that make the support run

/// A teammate holds the ball. The back line keeps its shape; the closest
/// players either offer for a pressed holder or drop short for their
/// goalkeeper; everyone else recovers their home position.
#[derive(Default)]
pub struct SupportingState {}

impl StateHandler for SupportingState {
    fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError> {
        let me = ctx.me();

        if ctx.is_defender(me.number) {
            let position = defensive_position(
                &ctx.ball().position(),
                &ctx.defense_goal().center(),
                ctx.config.side,
                me.number,
                &ctx.config.defender_numbers,
            );

            return Ok(vec![Command::move_to(position)]);
        }

        let holder = ctx
            .ball()
            .holder()
            .ok_or(DecisionError::MissingBallHolder("supporting"))?;

        if holder.is_goalkeeper() {
            let ranked = ctx.players().teammates().ranked_by_distance(&holder.position);

            if ranked
                .iter()
                .take(KEEPER_OUTLET_COUNT)
                .any(|player| player.number == me.number)
            {
                return Ok(vec![Command::move_to(holder.position)]);
            }
        }

        if ctx.players().opponents().marks(holder, HOLDER_MARK_RADIUS) {
            let ranked = ctx.players().teammates().ranked_by_distance(&holder.position);

            if ranked
                .iter()
                .take(SUPPORTER_COUNT)
                .any(|player| player.number == me.number)
            {
                let position = support_position(
                    &holder.position,
                    ctx.players().opponents().all(),
                    ctx.config.side,
                );

                return Ok(vec![Command::move_to(position)]);
            }
        }

        Ok(vec![Command::move_to(ctx.expected_position())])
    }
}
