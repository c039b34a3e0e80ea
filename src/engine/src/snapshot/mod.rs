pub mod agent;
pub mod ball;
pub mod goal;
pub mod snapshot;

pub use agent::{Agent, GOALKEEPER_NUMBER, Side};
pub use ball::{Ball, Velocity};
pub use goal::Goal;
pub use snapshot::{GameSnapshot, PossessionRole};
