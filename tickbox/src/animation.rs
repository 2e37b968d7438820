use std::time::Duration;

/// Easing function for animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A scalar animation running on a virtual clock.
///
/// `start` is a timestamp on the owning surface's clock, so an animation can be
/// sampled at any time without touching wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f32,
    pub to: f32,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Animation {
    pub fn new(from: f32, to: f32, start: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Linear progress at `now`, clamped to 0.0..=1.0.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Duration) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        lerp(self.from, self.to, eased)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }
}

/// Linear interpolation for f32 values.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
