use crate::constants::{GOAL_ZONE_RANGE, field_center};
use crate::engine::{Command, DecisionError, TickContext};
use crate::snapshot::{Agent, Goal};
use crate::strategies::common::players::most_advanced;
use crate::strategies::common::shooting::best_shot_target;
use crate::strategies::processor::StateHandler;

const PASS_FREE_RADIUS: f32 = 600.0; // Opponent-free radius around a pass target
const MARKING_RADIUS: f32 = 700.0; // Pressure radius that forces the holder to pass

/// This agent holds the ball. Back-line carriers never dribble out; they
/// look for a forward outlet or clear to midfield. Everyone else shoots
/// from the strike zone, passes out of pressure, or carries the ball at
/// the goal.
#[derive(Default)]
pub struct HoldingState {}

impl StateHandler for HoldingState {
    fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError> {
        let me = ctx.me();
        let attack_goal = ctx.attack_goal();

        if ctx.is_defender(me.number) {
            return Ok(vec![self.distribute_from_back(ctx)]);
        }

        if self.in_strike_zone(ctx, &attack_goal) {
            let keeper = ctx.snapshot.opponent_goalkeeper.as_ref();
            let target = best_shot_target(&me.position, &attack_goal, keeper);

            return Ok(vec![Command::kick_to(target)]);
        }

        if ctx.players().opponents().marks(me, MARKING_RADIUS) {
            if let Some(receiver) = self.best_receiver(ctx, false) {
                return Ok(vec![Command::kick_to(receiver.position)]);
            }
        }

        // Unmarked, or no pass found: keep carrying toward the goal.
        Ok(vec![Command::move_to(attack_goal.center())])
    }
}

impl HoldingState {
    fn distribute_from_back(&self, ctx: &TickContext) -> Command {
        match self.best_receiver(ctx, true) {
            Some(receiver) => Command::kick_to(receiver.position),
            None => Command::kick_to(field_center()),
        }
    }

    /// Most advanced free teammate, optionally skipping the back line.
    fn best_receiver<'b>(
        &self,
        ctx: &'b TickContext<'b>,
        exclude_defenders: bool,
    ) -> Option<&'b Agent> {
        let free = ctx.players().teammates().free(PASS_FREE_RADIUS);

        let candidates: Vec<&Agent> = if exclude_defenders {
            free.into_iter()
                .filter(|player| !ctx.is_defender(player.number))
                .collect()
        } else {
            free
        };

        most_advanced(&candidates, ctx.config.side)
    }

    fn in_strike_zone(&self, ctx: &TickContext, goal: &Goal) -> bool {
        let policy = &ctx.config.shot_policy;
        let x_distance = (ctx.me().position.x - goal.center().x).abs();

        if x_distance >= GOAL_ZONE_RANGE * policy.strike_zone_factor {
            return false;
        }

        match policy.lateral_margin {
            None => true,
            Some(margin) => {
                let y = ctx.me().position.y;
                y > goal.bottom_pole().y - margin && y < goal.top_pole().y + margin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BALL_SIZE;
    use crate::engine::{EngineConfig, ShotPolicy};
    use crate::snapshot::{PossessionRole, Side};
    use crate::testing::{SnapshotBuilder, StaticHomes, agent};
    use nalgebra::Vector3;

    fn homes() -> StaticHomes {
        StaticHomes(Vector3::new(6000.0, 5000.0, 0.0))
    }

    #[test]
    fn test_defender_passes_to_most_advanced_free_forward() {
        let me = agent(4, Side::Home, 3000.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me)
            .teammate(agent(10, Side::Home, 5000.0, 3000.0))
            .teammate(agent(8, Side::Home, 4000.0, 5000.0))
            .build();

        let config = EngineConfig::new(Side::Home, 4);
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();

        assert_eq!(
            commands,
            vec![Command::kick_to(Vector3::new(5000.0, 3000.0, 0.0))]
        );
    }

    #[test]
    fn test_defender_with_no_outlet_clears_to_midfield() {
        let me = agent(4, Side::Home, 3000.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me)
            .teammate(agent(2, Side::Home, 2500.0, 7000.0))
            .teammate(agent(10, Side::Home, 5000.0, 3000.0))
            .opponent(agent(6, Side::Away, 5200.0, 3000.0))
            .build();

        let config = EngineConfig::new(Side::Home, 4);
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();

        assert_eq!(commands, vec![Command::kick_to(field_center())]);
    }

    #[test]
    fn test_striker_in_the_zone_shoots_at_the_open_corner() {
        let me = agent(9, Side::Home, 19000.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me)
            .opponent_goalkeeper(agent(1, Side::Away, 19800.0, 4200.0))
            .build();

        let config = EngineConfig::new(Side::Home, 9);
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();
        let goal = Goal::attack(Side::Home);

        assert_eq!(
            commands,
            vec![Command::kick_to(Vector3::new(
                goal.top_pole().x,
                goal.top_pole().y - BALL_SIZE,
                0.0,
            ))]
        );
    }

    #[test]
    fn test_wide_positions_are_outside_the_default_strike_zone() {
        // Close to the goal line but far beyond the lateral margin.
        let me = agent(9, Side::Home, 19000.0, 900.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me).build();

        let config = EngineConfig::new(Side::Home, 9);
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();

        assert_eq!(
            commands,
            vec![Command::move_to(Goal::attack(Side::Home).center())]
        );
    }

    #[test]
    fn test_distance_only_policy_allows_wide_shots() {
        let me = agent(9, Side::Home, 19000.0, 900.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me).build();

        let config = EngineConfig::new(Side::Home, 9).with_shot_policy(ShotPolicy {
            strike_zone_factor: 1.5,
            lateral_margin: None,
        });
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();

        // No keeper in the snapshot: the shot falls back to the top pole.
        assert_eq!(
            commands,
            vec![Command::kick_to(Goal::attack(Side::Home).top_pole())]
        );
    }

    #[test]
    fn test_marked_holder_passes_forward() {
        let me = agent(8, Side::Home, 10000.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me)
            .teammate(agent(9, Side::Home, 13000.0, 4000.0))
            .opponent(agent(6, Side::Away, 10400.0, 5000.0))
            .build();

        let config = EngineConfig::new(Side::Home, 8);
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();

        assert_eq!(
            commands,
            vec![Command::kick_to(Vector3::new(13000.0, 4000.0, 0.0))]
        );
    }

    #[test]
    fn test_unmarked_holder_advances_on_goal() {
        let me = agent(8, Side::Home, 10000.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Holding, me)
            .teammate(agent(9, Side::Home, 13000.0, 4000.0))
            .build();

        let config = EngineConfig::new(Side::Home, 8);
        let homes = homes();
        let ctx = TickContext::new(&snapshot, &config, &homes);

        let commands = HoldingState::default().process(&ctx).unwrap();

        assert_eq!(
            commands,
            vec![Command::move_to(Goal::attack(Side::Home).center())]
        );
    }
}
