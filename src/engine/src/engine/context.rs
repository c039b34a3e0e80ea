use crate::engine::config::EngineConfig;
use crate::home::HomePositionProvider;
use crate::snapshot::{Agent, GameSnapshot, Goal};
use crate::strategies::common::ball::BallOps;
use crate::strategies::common::players::PlayerOps;
use nalgebra::Vector3;

/// Everything one dispatch sees: the tick's snapshot, the agent's static
/// configuration and the injected home-position service. Built per tick,
/// dropped with it.
pub struct TickContext<'a> {
    pub snapshot: &'a GameSnapshot,
    pub config: &'a EngineConfig,
    pub homes: &'a dyn HomePositionProvider,
    /// Oscillation sample for the goalkeeper, drawn once per tick by the
    /// engine. Handlers read it and never touch the rng themselves.
    pub jitter: Vector3<f32>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        snapshot: &'a GameSnapshot,
        config: &'a EngineConfig,
        homes: &'a dyn HomePositionProvider,
    ) -> Self {
        TickContext {
            snapshot,
            config,
            homes,
            jitter: Vector3::zeros(),
        }
    }

    pub fn with_jitter(mut self, jitter: Vector3<f32>) -> Self {
        self.jitter = jitter;
        self
    }

    #[inline]
    pub fn me(&self) -> &'a Agent {
        &self.snapshot.me
    }

    pub fn ball(&self) -> BallOps<'_> {
        BallOps::new(self)
    }

    pub fn players(&self) -> PlayerOps<'_> {
        PlayerOps::new(self)
    }

    #[inline]
    pub fn is_defender(&self, number: u32) -> bool {
        self.config.is_defender(number)
    }

    /// Home position assigned to this agent by the external mapper.
    pub fn expected_position(&self) -> Vector3<f32> {
        self.homes
            .expected_position(self.config.number, self.config.side)
    }

    pub fn attack_goal(&self) -> Goal {
        Goal::attack(self.config.side)
    }

    pub fn defense_goal(&self) -> Goal {
        Goal::defense(self.config.side)
    }
}
