use crate::snapshot::{Agent, Ball};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Possession state the match server assigns to the turn. Exactly one is
/// active per tick; the engine only reacts to it and never computes
/// transitions itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PossessionRole {
    /// Nobody holds the ball.
    Disputing,
    /// An opponent holds the ball.
    Defending,
    /// This agent holds the ball.
    Holding,
    /// A teammate holds the ball.
    Supporting,
}

impl Display for PossessionRole {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PossessionRole::Disputing => write!(f, "Disputing"),
            PossessionRole::Defending => write!(f, "Defending"),
            PossessionRole::Holding => write!(f, "Holding"),
            PossessionRole::Supporting => write!(f, "Supporting"),
        }
    }
}

/// One tick's full world view, built by the transport layer and consumed
/// read-only. Nothing in here outlives the tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub me: Agent,
    /// Full own-side roster, self included.
    pub team: Vec<Agent>,
    pub opponents: Vec<Agent>,
    pub ball: Ball,
    pub role: PossessionRole,
    /// Player currently holding the ball, on either side, if any.
    pub ball_holder: Option<Agent>,
    /// The opposing goalkeeper, when the transport layer identified one.
    pub opponent_goalkeeper: Option<Agent>,
}
