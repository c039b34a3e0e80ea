use crate::engine::TickContext;
use crate::snapshot::{Agent, GOALKEEPER_NUMBER, Side};
use crate::vector::VectorExtensions;
use itertools::Itertools;
use nalgebra::Vector3;

/// Opponents further back than this along the attack axis are ignored by
/// the marking check; a trailing opponent poses no pressing threat.
const BEHIND_TOLERANCE: f32 = 200.0;

/// Agents ordered ascending by distance to `origin`. The sort is stable, so
/// equal distances keep their input order.
pub fn rank_by_distance<'a>(origin: &Vector3<f32>, agents: &'a [Agent]) -> Vec<&'a Agent> {
    agents
        .iter()
        .sorted_by(|a, b| {
            a.position
                .distance_to(origin)
                .partial_cmp(&b.position.distance_to(origin))
                .unwrap()
        })
        .collect()
}

/// Strict containment check; points on the boundary are out.
#[inline]
pub fn in_field(point: &Vector3<f32>, width: f32, height: f32) -> bool {
    point.x > 0.0 && point.x < width && point.y > 0.0 && point.y < height
}

/// Whether any opponent presses `agent`: within `radius` and not behind it
/// relative to `side`'s attacking direction.
pub fn is_marked(agent: &Agent, opponents: &[Agent], radius: f32, side: Side) -> bool {
    opponents.iter().any(|opponent| {
        if agent.position.distance_to(&opponent.position) > radius {
            return false;
        }

        let is_behind = match side {
            Side::Home => opponent.position.x < agent.position.x - BEHIND_TOLERANCE,
            Side::Away => opponent.position.x > agent.position.x + BEHIND_TOLERANCE,
        };

        !is_behind
    })
}

/// Teammates with no opponent within `radius`, excluding the goalkeeper and
/// the caller itself. Ordered ascending by (x, y) purely for determinism;
/// callers re-sort by tactical criteria.
pub fn free_allies<'a>(
    team: &'a [Agent],
    opponents: &[Agent],
    radius: f32,
    own_number: u32,
) -> Vec<&'a Agent> {
    team.iter()
        .filter(|ally| ally.number != GOALKEEPER_NUMBER && ally.number != own_number)
        .filter(|ally| {
            opponents
                .iter()
                .all(|opponent| ally.position.distance_to(&opponent.position) > radius)
        })
        .sorted_by(|a, b| {
            a.position
                .x
                .partial_cmp(&b.position.x)
                .unwrap()
                .then(a.position.y.partial_cmp(&b.position.y).unwrap())
        })
        .collect()
}

/// The player furthest along `side`'s attack axis. Ties keep input order.
pub fn most_advanced<'a>(players: &[&'a Agent], side: Side) -> Option<&'a Agent> {
    let sign = side.attack_sign();

    players
        .iter()
        .sorted_by(|a, b| {
            (b.position.x * sign)
                .partial_cmp(&(a.position.x * sign))
                .unwrap()
        })
        .next()
        .copied()
}

pub struct PlayerOps<'b> {
    ctx: &'b TickContext<'b>,
}

impl<'b> PlayerOps<'b> {
    pub fn new(ctx: &'b TickContext<'b>) -> Self {
        PlayerOps { ctx }
    }

    pub fn teammates(&self) -> TeammateOps<'b> {
        TeammateOps { ctx: self.ctx }
    }

    pub fn opponents(&self) -> OpponentOps<'b> {
        OpponentOps { ctx: self.ctx }
    }
}

pub struct TeammateOps<'b> {
    ctx: &'b TickContext<'b>,
}

impl<'b> TeammateOps<'b> {
    #[inline]
    pub fn all(&self) -> &'b [Agent] {
        &self.ctx.snapshot.team
    }

    pub fn ranked_by_distance(&self, origin: &Vector3<f32>) -> Vec<&'b Agent> {
        rank_by_distance(origin, self.all())
    }

    pub fn closest_to(&self, origin: &Vector3<f32>) -> Option<&'b Agent> {
        self.ranked_by_distance(origin).into_iter().next()
    }

    pub fn free(&self, radius: f32) -> Vec<&'b Agent> {
        free_allies(
            self.all(),
            &self.ctx.snapshot.opponents,
            radius,
            self.ctx.config.number,
        )
    }
}

pub struct OpponentOps<'b> {
    ctx: &'b TickContext<'b>,
}

impl<'b> OpponentOps<'b> {
    #[inline]
    pub fn all(&self) -> &'b [Agent] {
        &self.ctx.snapshot.opponents
    }

    pub fn marks(&self, agent: &Agent, radius: f32) -> bool {
        is_marked(agent, self.all(), radius, self.ctx.config.side)
    }
}
