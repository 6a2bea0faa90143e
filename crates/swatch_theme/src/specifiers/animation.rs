use crate::theme::Theme;
use std::time::Duration;
use swatch_animation::Easing;

/// Timing of a themed animation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationSpecifier {
    /// Seconds before the animation starts
    pub delay: f64,
    /// Seconds the animation runs
    pub duration: f64,
    pub curve: Easing,
}

impl AnimationSpecifier {
    /// `delay` as a [`Duration`]; negative or non-finite values give zero
    pub fn delay(&self) -> Duration {
        seconds(self.delay)
    }

    /// `duration` as a [`Duration`]; negative or non-finite values give zero
    pub fn duration(&self) -> Duration {
        seconds(self.duration)
    }

    /// Eased progress at `elapsed` since the animation was started, in 0-1
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let running = elapsed.saturating_sub(self.delay());
        let total = self.duration();
        if total.is_zero() {
            return if elapsed < self.delay() { 0.0 } else { 1.0 };
        }
        let t = (running.as_secs_f64() / total.as_secs_f64()).min(1.0) as f32;
        self.curve.apply(t)
    }
}

fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}

impl Theme {
    /// Animation specifier at `key`, or `None` when no mapping is found.
    /// Not cached.
    pub fn animation_specifier(&self, key: &str) -> Option<AnimationSpecifier> {
        let dictionary = self.dictionary(key)?;

        Some(AnimationSpecifier {
            delay: self.time_interval_from_value(dictionary.get("delay")),
            duration: self.time_interval_from_value(dictionary.get("duration")),
            curve: self.style_from_value(dictionary.get("curve")),
        })
    }
}
