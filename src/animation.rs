//! Spring motion for animated reveal properties
//!
//! A damped harmonic oscillator parameterised the way platform property
//! animators are: by a duration and a damping ratio rather than stiffness.
//! The natural frequency is chosen so the oscillation envelope has decayed to
//! `SETTLE_EPSILON` of the starting displacement when `duration` elapses, at
//! which point the motion snaps onto its target.
//!
//! Retargeting keeps the current position and velocity, so a new request
//! issued mid-flight continues smoothly from wherever the old one had got to.

use crate::commands::AnimationCurve;

/// Remaining fraction of the initial displacement at `duration`
const SETTLE_EPSILON: f32 = 0.001;

/// Integration step upper bound (seconds)
const MAX_TIMESTEP: f32 = 1.0 / 240.0;

/// Below both of these the motion is considered at rest
const POSITION_THRESHOLD: f32 = 0.01;
const VELOCITY_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringMotion {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    elapsed: f32,
    duration: f32,
    settled: bool,
}

impl SpringMotion {
    /// A motion resting at `value`
    pub fn at_rest(value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            stiffness: 0.0,
            damping: 0.0,
            elapsed: 0.0,
            duration: 0.0,
            settled: true,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Start moving towards `target` from the current position and velocity
    pub fn retarget(&mut self, target: f32, curve: AnimationCurve) {
        let damping_ratio = curve.damping.clamp(f32::EPSILON, 1.0);
        let duration = curve.duration.max(f32::EPSILON);
        let omega = -SETTLE_EPSILON.ln() / (damping_ratio * duration);

        self.target = target;
        self.stiffness = omega * omega;
        self.damping = 2.0 * damping_ratio * omega;
        self.elapsed = 0.0;
        self.duration = duration;
        self.settled = false;
    }

    /// Jump to `value` with no motion
    pub fn snap_to(&mut self, value: f32) {
        *self = Self::at_rest(value);
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Returns `true` while the motion is still running.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.settled {
            return false;
        }

        // Semi-implicit Euler in small fixed steps for stability
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.settled {
            let step = remaining.min(MAX_TIMESTEP);
            remaining -= step;

            let displacement = self.position - self.target;
            let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            self.elapsed += step;

            let near = (self.position - self.target).abs() < POSITION_THRESHOLD
                && self.velocity.abs() < VELOCITY_THRESHOLD;
            if near || self.elapsed >= self.duration {
                self.snap_to(self.target);
            }
        }

        !self.settled
    }
}
