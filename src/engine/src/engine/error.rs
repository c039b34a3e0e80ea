use thiserror::Error;

/// Missing-data failures a dispatch branch can hit. Every variant is
/// contained at the tick boundary: the tick is logged and skipped, the
/// process keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("no ball holder in snapshot while {0}")]
    MissingBallHolder(&'static str),

    #[error("snapshot carries an empty team roster")]
    EmptyTeam,
}
