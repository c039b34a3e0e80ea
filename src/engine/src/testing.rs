//! Snapshot fixtures shared by strategy and engine tests.

use crate::home::HomePositionProvider;
use crate::snapshot::{Agent, Ball, GameSnapshot, PossessionRole, Side};
use nalgebra::Vector3;

pub fn agent(number: u32, side: Side, x: f32, y: f32) -> Agent {
    Agent::new(number, side, Vector3::new(x, y, 0.0))
}

/// Provider that answers every lookup with the same point, so tests can
/// assert "went home" without a real mapper.
pub struct StaticHomes(pub Vector3<f32>);

impl HomePositionProvider for StaticHomes {
    fn expected_position(&self, _number: u32, _side: Side) -> Vector3<f32> {
        self.0
    }
}

pub struct SnapshotBuilder {
    snapshot: GameSnapshot,
}

impl SnapshotBuilder {
    pub fn new(role: PossessionRole, me: Agent) -> Self {
        let team = vec![me.clone()];

        SnapshotBuilder {
            snapshot: GameSnapshot {
                me,
                team,
                opponents: Vec::new(),
                ball: Ball::stationary(Vector3::new(10000.0, 5000.0, 0.0)),
                role,
                ball_holder: None,
                opponent_goalkeeper: None,
            },
        }
    }

    pub fn teammate(mut self, agent: Agent) -> Self {
        self.snapshot.team.push(agent);
        self
    }

    pub fn opponent(mut self, agent: Agent) -> Self {
        self.snapshot.opponents.push(agent);
        self
    }

    pub fn ball(mut self, ball: Ball) -> Self {
        self.snapshot.ball = ball;
        self
    }

    pub fn ball_at(mut self, x: f32, y: f32) -> Self {
        self.snapshot.ball = Ball::stationary(Vector3::new(x, y, 0.0));
        self
    }

    /// Registers `agent` as the ball holder and parks the ball on it.
    pub fn holder(mut self, agent: Agent) -> Self {
        self.snapshot.ball = Ball::stationary(agent.position);
        self.snapshot.ball_holder = Some(agent);
        self
    }

    pub fn opponent_goalkeeper(mut self, agent: Agent) -> Self {
        self.snapshot.opponent_goalkeeper = Some(agent);
        self
    }

    pub fn build(self) -> GameSnapshot {
        self.snapshot
    }
}
