pub mod ball;
pub mod players;
pub mod shooting;
pub mod support;
pub mod team;

pub use ball::BallOps;
pub use players::{
    OpponentOps, PlayerOps, TeammateOps, free_allies, in_field, is_marked, most_advanced,
    rank_by_distance,
};
pub use shooting::best_shot_target;
pub use support::support_position;
pub use team::defensive_position;
