use crate::engine::TickContext;
use crate::snapshot::Agent;
use crate::vector::VectorExtensions;
use nalgebra::Vector3;

pub struct BallOps<'b> {
    ctx: &'b TickContext<'b>,
}

impl<'b> BallOps<'b> {
    pub fn new(ctx: &'b TickContext<'b>) -> Self {
        BallOps { ctx }
    }

    #[inline]
    pub fn position(&self) -> Vector3<f32> {
        self.ctx.snapshot.ball.position
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.ctx.snapshot.ball.velocity.speed
    }

    pub fn distance(&self) -> f32 {
        self.position().distance_to(&self.ctx.me().position)
    }

    pub fn distance_to(&self, point: &Vector3<f32>) -> f32 {
        self.position().distance_to(point)
    }

    #[inline]
    pub fn holder(&self) -> Option<&'b Agent> {
        self.ctx.snapshot.ball_holder.as_ref()
    }

    /// Lateral resting point of a rolling ball, a few steps ahead.
    pub fn forecast_position(&self, steps: usize) -> Vector3<f32> {
        self.ctx.snapshot.ball.forecast_position(steps)
    }
}
