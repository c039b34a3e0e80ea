use crate::engine::commands::Command;
use crate::engine::config::EngineConfig;
use crate::engine::context::TickContext;
use crate::home::HomePositionProvider;
use crate::snapshot::GameSnapshot;
use crate::strategies::processor::PlayerState;
use log::{debug, error};
use nalgebra::Vector3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const OSCILLATION_RANGE: i32 = 50; // Keeper wobble amplitude per axis

/// Per-agent decision engine. Holds only static configuration, the injected
/// home-position service and a randomness source; every decision is a pure
/// function of those plus the tick's snapshot.
pub struct DecisionEngine<R: Rng = SmallRng> {
    config: EngineConfig,
    homes: Box<dyn HomePositionProvider + Send + Sync>,
    rng: R,
}

impl DecisionEngine<SmallRng> {
    pub fn new(config: EngineConfig, homes: Box<dyn HomePositionProvider + Send + Sync>) -> Self {
        Self::with_rng(config, homes, SmallRng::from_os_rng())
    }
}

impl<R: Rng> DecisionEngine<R> {
    pub fn with_rng(
        config: EngineConfig,
        homes: Box<dyn HomePositionProvider + Send + Sync>,
        rng: R,
    ) -> Self {
        DecisionEngine { config, homes, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// One decision cycle. Any branch failure is contained here: the tick
    /// is logged and skipped, never the process. An erroring tick costs
    /// exactly one empty contribution.
    pub fn decide(&mut self, snapshot: &GameSnapshot) -> Vec<Command> {
        let jitter = Vector3::new(
            self.rng.random_range(-OSCILLATION_RANGE..=OSCILLATION_RANGE) as f32,
            self.rng.random_range(-OSCILLATION_RANGE..=OSCILLATION_RANGE) as f32,
            0.0,
        );

        let ctx = TickContext::new(snapshot, &self.config, self.homes.as_ref()).with_jitter(jitter);
        let state = PlayerState::classify(snapshot.role, self.config.number);

        match state.process(&ctx) {
            Ok(commands) => {
                debug!(
                    "player {} {}: {} command(s)",
                    self.config.number,
                    state,
                    commands.len()
                );
                commands
            }
            Err(err) => {
                error!("player {} skipped turn while {}: {}", self.config.number, state, err);
                Vec::new()
            }
        }
    }
}

/// Evaluate many independent agents in one call. Decisions share no mutable
/// state, so they fan out across threads freely.
pub fn decide_all<R: Rng + Send>(
    engines: &mut [DecisionEngine<R>],
    snapshots: &[GameSnapshot],
) -> Vec<Vec<Command>> {
    engines
        .par_iter_mut()
        .zip(snapshots.par_iter())
        .map(|(engine, snapshot)| engine.decide(snapshot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{PossessionRole, Side};
    use crate::testing::{SnapshotBuilder, StaticHomes, agent};

    fn engine_for(number: u32) -> DecisionEngine<SmallRng> {
        DecisionEngine::with_rng(
            EngineConfig::new(Side::Home, number),
            Box::new(StaticHomes(Vector3::new(6000.0, 5000.0, 0.0))),
            SmallRng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_failed_tick_yields_no_commands() {
        // Supporting with no ball holder violates the branch's assumption.
        let me = agent(9, Side::Home, 9000.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Supporting, me).build();

        let commands = engine_for(9).decide(&snapshot);

        assert!(commands.is_empty());
    }

    #[test]
    fn test_engine_recovers_on_the_next_tick() {
        let me = agent(9, Side::Home, 9000.0, 5000.0);
        let broken = SnapshotBuilder::new(PossessionRole::Supporting, me.clone()).build();
        let fine = SnapshotBuilder::new(PossessionRole::Disputing, me).build();

        let mut engine = engine_for(9);

        assert!(engine.decide(&broken).is_empty());
        assert!(!engine.decide(&fine).is_empty());
    }

    #[test]
    fn test_number_one_is_dispatched_as_goalkeeper() {
        // A disputing turn still runs the keeper policy for number 1: far
        // ball, so a single move command and no catch.
        let me = agent(1, Side::Home, 300.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Disputing, me)
            .ball_at(15000.0, 5000.0)
            .build();

        let commands = engine_for(1).decide(&snapshot);

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], Command::Move { .. }));
    }

    #[test]
    fn test_keeper_oscillation_is_bounded() {
        let me = agent(1, Side::Home, 300.0, 5000.0);
        let snapshot = SnapshotBuilder::new(PossessionRole::Disputing, me)
            .ball_at(15000.0, 5000.0)
            .build();

        let mut engine = engine_for(1);

        for _ in 0..32 {
            let commands = engine.decide(&snapshot);
            let Command::Move { target } = commands[0] else {
                panic!("expected a move command");
            };

            assert!((target.x - 0.0).abs() <= OSCILLATION_RANGE as f32);
            assert!((target.y - 5000.0).abs() <= OSCILLATION_RANGE as f32);
        }
    }

    #[test]
    fn test_decide_all_matches_individual_decisions() {
        let me_a = agent(9, Side::Home, 9000.0, 5000.0);
        let me_b = agent(10, Side::Home, 11000.0, 5000.0);
        let snapshots = vec![
            SnapshotBuilder::new(PossessionRole::Disputing, me_a)
                .ball_at(9100.0, 5000.0)
                .build(),
            SnapshotBuilder::new(PossessionRole::Disputing, me_b)
                .ball_at(9100.0, 5000.0)
                .build(),
        ];

        let mut engines = vec![engine_for(9), engine_for(10)];
        let batched = decide_all(&mut engines, &snapshots);

        let mut solo_engines = vec![engine_for(9), engine_for(10)];
        let solo: Vec<_> = solo_engines
            .iter_mut()
            .zip(&snapshots)
            .map(|(engine, snapshot)| engine.decide(snapshot))
            .collect();

        assert_eq!(batched, solo);
    }
}
