pub mod common;
pub mod defending;
pub mod disputing;
pub mod goalkeeping;
pub mod holding;
pub mod processor;
pub mod supporting;

pub use common::{
    best_shot_target, defensive_position, free_allies, in_field, is_marked, most_advanced,
    rank_by_distance, support_position,
};
pub use processor::{PlayerState, StateHandler};
