use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Shirt number reserved for goalkeepers on both sides.
pub const GOALKEEPER_NUMBER: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Sign of the attacking direction along the x axis. Home attacks
    /// towards positive x, Away towards negative x.
    #[inline]
    pub fn attack_sign(&self) -> f32 {
        match self {
            Side::Home => 1.0,
            Side::Away => -1.0,
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub number: u32,
    pub side: Side,
    pub position: Vector3<f32>,
}

impl Agent {
    pub fn new(number: u32, side: Side, position: Vector3<f32>) -> Self {
        Agent {
            number,
            side,
            position,
        }
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.number == GOALKEEPER_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_sign_mirrors_by_side() {
        assert_eq!(Side::Home.attack_sign(), 1.0);
        assert_eq!(Side::Away.attack_sign(), -1.0);
        assert_eq!(Side::Home.opposite(), Side::Away);
    }

    #[test]
    fn test_goalkeeper_by_number() {
        let keeper = Agent::new(1, Side::Home, Vector3::zeros());
        let outfielder = Agent::new(9, Side::Home, Vector3::zeros());

        assert!(keeper.is_goalkeeper());
        assert!(!outfielder.is_goalkeeper());
    }
}
