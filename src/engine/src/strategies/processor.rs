use crate::engine::{Command, DecisionError, TickContext};
use crate::snapshot::{GOALKEEPER_NUMBER, PossessionRole};
use crate::strategies::defending::DefendingState;
use crate::strategies::disputing::DisputingState;
use crate::strategies::goalkeeping::GoalkeepingState;
use crate::strategies::holding::HoldingState;
use crate::strategies::supporting::SupportingState;
use std::fmt::{Display, Formatter};

/// One tactical policy. Handlers are stateless objects: everything they
/// need arrives through the context, everything they produce leaves as
/// commands or an error for the tick boundary to contain.
pub trait StateHandler {
    fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Disputing,
    Defending,
    Holding,
    Supporting,
    Goalkeeping,
}

impl Display for PlayerState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PlayerState::Disputing => write!(f, "Disputing"),
            PlayerState::Defending => write!(f, "Defending"),
            PlayerState::Holding => write!(f, "Holding"),
            PlayerState::Supporting => write!(f, "Supporting"),
            PlayerState::Goalkeeping => write!(f, "Goalkeeping"),
        }
    }
}

impl PlayerState {
    /// Number 1 always runs the goalkeeper policy, whatever the possession
    /// state of the turn; everyone else maps 1:1 from it.
    pub fn classify(role: PossessionRole, number: u32) -> PlayerState {
        if number == GOALKEEPER_NUMBER {
            return PlayerState::Goalkeeping;
        }

        match role {
            PossessionRole::Disputing => PlayerState::Disputing,
            PossessionRole::Defending => PlayerState::Defending,
            PossessionRole::Holding => PlayerState::Holding,
            PossessionRole::Supporting => PlayerState::Supporting,
        }
    }

    pub fn process(&self, ctx: &TickContext) -> Result<Vec<Command>, DecisionError> {
        match self {
            PlayerState::Disputing => DisputingState::default().process(ctx),
            PlayerState::Defending => DefendingState::default().process(ctx),
            PlayerState::Holding => HoldingState::default().process(ctx),
            PlayerState::Supporting => SupportingState::default().process(ctx),
            PlayerState::Goalkeeping => GoalkeepingState::default().process(ctx),
        }
    }
}
