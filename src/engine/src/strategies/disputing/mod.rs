use crate::engine::{Command, DecisionError, TickContext};
use crate::strategies::processor::StateHandler;

const CATCHER_COUNT: usize = 3; // Teammates that chase a disputed ball

/// Nobody holds the ball: the closest few teammates converge on it, the
/// rest keep their shape. Everyone tries the catch in case the ball rolls
/// within reach.
#[derive(Default)]
pub struct DisputingState {}

impl StateHandler for DisputingState {
    fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError> {
        let ball_position = ctx.ball().position();

        let ranked = ctx.players().teammates().ranked_by_distance(&ball_position);
        let am_catcher = ranked
            .iter()
            .take(CATCHER_COUNT)
            .any(|player| player.number == ctx.me().number);

        let target = if am_catcher {
            ball_position
        } else {
            ctx.expected_position()
        };

        Ok(vec![Command::move_to(target), Command::Catch])
    }
}
