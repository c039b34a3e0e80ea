use crate::snapshot::Side;

/// When a ball holder may shoot instead of advancing or passing.
///
/// Both observed policy variants are expressible: `lateral_margin = None`
/// keeps the plain distance check, `Some(margin)` additionally requires the
/// shooter's y to sit within the goal mouth extended by `margin` on each
/// side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPolicy {
    /// Multiple of the goal-zone range within which shots are considered.
    pub strike_zone_factor: f32,
    /// Extra lateral tolerance beyond the goal poles, if required at all.
    pub lateral_margin: Option<f32>,
}

impl Default for ShotPolicy {
    fn default() -> Self {
        ShotPolicy {
            strike_zone_factor: 1.5,
            lateral_margin: Some(400.0),
        }
    }
}

/// Static per-agent configuration. Everything the decision engine knows
/// beyond the tick snapshot lives here.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub side: Side,
    /// This agent's shirt number.
    pub number: u32,
    /// Numbers playing as defenders. Injected so formations are testable
    /// with alternate rosters.
    pub defender_numbers: Vec<u32>,
    pub shot_policy: ShotPolicy,
}

impl EngineConfig {
    pub fn new(side: Side, number: u32) -> Self {
        EngineConfig {
            side,
            number,
            defender_numbers: vec![2, 3, 4, 5],
            shot_policy: ShotPolicy::default(),
        }
    }

    pub fn with_defenders(mut self, numbers: Vec<u32>) -> Self {
        self.defender_numbers = numbers;
        self
    }

    pub fn with_shot_policy(mut self, policy: ShotPolicy) -> Self {
        self.shot_policy = policy;
        self
    }

    #[inline]
    pub fn is_defender(&self, number: u32) -> bool {
        self.defender_numbers.contains(&number)
    }
}
