// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `powf`
use kurbo::Vec2;

/// Deceleration parameters for [`BallisticScroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FlingConfig {
    /// Exponential friction coefficient `k` in `v(t) = v₀·e^(−k t)`, per second.
    pub decay_rate: f64,
    /// Speed in pixels per second below which an axis comes to rest.
    pub min_velocity: f64,
}

impl FlingConfig {
    /// Default deceleration.
    pub const DEFAULT: Self = Self {
        decay_rate: 4.0,
        min_velocity: 20.0,
    };

    /// Sets [`Self::decay_rate`].
    #[must_use]
    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    /// Sets [`Self::min_velocity`].
    #[must_use]
    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self
    }
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug)]
struct AxisMotion {
    start: f64,
    velocity: f64,
    min: f64,
    max: f64,
}

impl AxisMotion {
    fn is_moving(&self, config: &FlingConfig) -> bool {
        self.velocity.abs() > config.min_velocity && config.decay_rate > 0.0
    }

    /// Where the axis comes to rest if nothing interrupts it.
    fn rest(&self, config: &FlingConfig) -> f64 {
        if !self.is_moving(config) {
            return self.start;
        }
        let residual = if self.velocity > 0.0 {
            config.min_velocity
        } else {
            -config.min_velocity
        };
        let travel = (self.velocity - residual) / config.decay_rate;
        (self.start + travel).round().clamp(self.min, self.max)
    }

    /// Position at `elapsed` seconds and whether the axis has stopped.
    fn sample(&self, elapsed: f64, config: &FlingConfig) -> (f64, bool) {
        if !self.is_moving(config) {
            return (self.start, true);
        }
        let decay = core::f64::consts::E.powf(-config.decay_rate * elapsed);
        if self.velocity.abs() * decay <= config.min_velocity {
            return (self.rest(config), true);
        }
        let x = (self.start + self.velocity / config.decay_rate * (1.0 - decay)).round();
        let hit_bound = if self.velocity > 0.0 {
            x >= self.max
        } else {
            x <= self.min
        };
        (x.clamp(self.min, self.max), hit_bound)
    }
}

/// Velocity-seeded deceleration toward rest.
///
/// Each axis follows exponential friction: `v(t) = v₀·e^(−k t)` and
/// `x(t) = x₀ + v₀/k·(1 − e^(−k t))`. An axis stops once its speed drops
/// below [`FlingConfig::min_velocity`] or it reaches a bound; the simulation
/// finishes when both axes have stopped. Reported positions are whole pixels
/// and never leave the bounds given at construction.
#[derive(Clone, Debug)]
pub struct BallisticScroll {
    config: FlingConfig,
    start_ms: u64,
    x: AxisMotion,
    y: AxisMotion,
    start: Vec2,
    position: Vec2,
    final_position: Vec2,
    finished: bool,
}

impl BallisticScroll {
    /// Starts a simulation at `start` with `velocity` (pixels per second),
    /// confined to `[min, max]` per axis.
    ///
    /// The start position is clamped into the bounds.
    #[must_use]
    pub fn new(
        start: Vec2,
        velocity: Vec2,
        min: Vec2,
        max: Vec2,
        now_ms: u64,
        config: FlingConfig,
    ) -> Self {
        let start = Vec2::new(
            start.x.round().clamp(min.x, max.x.max(min.x)),
            start.y.round().clamp(min.y, max.y.max(min.y)),
        );
        let x = AxisMotion {
            start: start.x,
            velocity: velocity.x,
            min: min.x,
            max: max.x.max(min.x),
        };
        let y = AxisMotion {
            start: start.y,
            velocity: velocity.y,
            min: min.y,
            max: max.y.max(min.y),
        };
        let finished = !x.is_moving(&config) && !y.is_moving(&config);
        Self {
            config,
            start_ms: now_ms,
            x,
            y,
            start,
            position: start,
            final_position: Vec2::new(x.rest(&config), y.rest(&config)),
            finished,
        }
    }

    /// Advances to `now_ms`. Returns `true` while the simulation is running.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64 / 1000.0;
        let (x, x_done) = self.x.sample(elapsed, &self.config);
        let (y, y_done) = self.y.sample(elapsed, &self.config);
        self.position = Vec2::new(x, y);
        if x_done && y_done {
            self.finished = true;
            self.final_position = self.position;
        }
        !self.finished
    }

    /// Stops at the current position, which becomes the final position.
    pub fn force_finish(&mut self) {
        self.finished = true;
        self.final_position = self.position;
    }

    /// Returns `true` once both axes are at rest.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the position of the last update.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the (clamped) start position.
    #[must_use]
    pub fn start_position(&self) -> Vec2 {
        self.start
    }

    /// Returns the resting position: predicted while running, actual once
    /// finished.
    #[must_use]
    pub fn final_position(&self) -> Vec2 {
        self.final_position
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{BallisticScroll, FlingConfig};

    fn fling(start: Vec2, velocity: Vec2, max: Vec2) -> BallisticScroll {
        BallisticScroll::new(start, velocity, Vec2::ZERO, max, 0, FlingConfig::DEFAULT)
    }

    #[test]
    fn decelerates_to_predicted_rest() {
        let mut f = fling(Vec2::ZERO, Vec2::new(1000.0, 0.0), Vec2::new(10_000.0, 0.0));
        // (1000 - 20) / 4
        assert_eq!(f.final_position(), Vec2::new(245.0, 0.0));

        let mut previous = 0.0;
        let mut step: Option<f64> = None;
        let mut now = 0;
        while f.update(now) {
            let x = f.position().x;
            let delta = x - previous;
            assert!(delta >= 0.0, "motion must be monotonic");
            // The first tick pins the start, so it never moves.
            if let Some(step) = step {
                assert!(delta <= step + 1.0, "motion must decelerate");
            }
            if step.is_some() || delta > 0.0 {
                step = Some(delta);
            }
            previous = x;
            now += 16;
            assert!(now < 5_000, "fling must settle");
        }
        assert_eq!(f.position(), Vec2::new(245.0, 0.0));
        assert_eq!(f.final_position(), f.position());
    }

    #[test]
    fn overshoot_stops_at_bound() {
        let limit = Vec2::new(100.0, 80.0);
        let mut f = fling(Vec2::new(50.0, 40.0), Vec2::new(5000.0, -5000.0), limit);
        let mut now = 0;
        while f.update(now) {
            let p = f.position();
            assert!((0.0..=limit.x).contains(&p.x), "x out of bounds: {p:?}");
            assert!((0.0..=limit.y).contains(&p.y), "y out of bounds: {p:?}");
            now += 16;
        }
        assert_eq!(f.final_position(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn slow_release_is_already_finished() {
        let mut f = fling(Vec2::new(10.0, 10.0), Vec2::new(15.0, -5.0), Vec2::new(100.0, 100.0));
        assert!(f.is_finished());
        assert!(!f.update(100));
        assert_eq!(f.final_position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn force_finish_keeps_current_position() {
        let mut f = fling(Vec2::ZERO, Vec2::new(0.0, 2000.0), Vec2::new(0.0, 10_000.0));
        f.update(100);
        let mid = f.position();
        assert!(mid.y > 0.0, "expected progress, got {mid:?}");
        f.force_finish();
        assert!(f.is_finished());
        assert_eq!(f.final_position(), mid);
        assert!(!f.update(1_000));
        assert_eq!(f.position(), mid);
    }

    #[test]
    fn start_outside_bounds_is_clamped() {
        let f = fling(Vec2::new(-20.0, 500.0), Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert_eq!(f.start_position(), Vec2::new(0.0, 100.0));
    }

    #[test]
    fn positions_are_whole_pixels() {
        let mut f = fling(Vec2::ZERO, Vec2::new(777.0, 333.0), Vec2::new(1000.0, 1000.0));
        for now in (0..400).step_by(7) {
            f.update(now);
            let p = f.position();
            assert_eq!(p, p.round());
        }
    }
}
