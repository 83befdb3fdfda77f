// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// `1 − (1 − t)^8`: most of the distance is covered early, then the
    /// motion settles slowly.
    #[default]
    Decelerate,
    /// Constant speed.
    Linear,
}

impl Easing {
    /// Evaluates the curve. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Decelerate => {
                let u = 1.0 - t;
                let u2 = u * u;
                let u4 = u2 * u2;
                1.0 - u4 * u4
            }
            Self::Linear => t,
        }
    }
}
