//! Eased animation of the step progress gauge

use std::time::{Duration, Instant};

/// Gauge value sliding toward the current step's fraction
#[derive(Debug, Clone, Copy)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started_at: Instant,
}

impl ProgressAnimation {
    /// Duration of one slide between steps
    const DURATION: Duration = Duration::from_millis(500);

    pub fn new(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now.checked_sub(Self::DURATION).unwrap_or(now),
        }
    }

    /// Start sliding from wherever the gauge is now toward `target`
    pub fn retarget(&mut self, target: f64, now: Instant) {
        if (target - self.to).abs() < f64::EPSILON {
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.started_at = now;
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value(&self, now: Instant) -> f64 {
        let progress = self.progress(now);
        let eased = f64::from(simple_easing::cubic_in_out(progress as f32));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / Self::DURATION.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_settled() {
        let now = Instant::now();
        let anim = ProgressAnimation::new(0.0, now);
        assert!(!anim.is_animating(now));
        assert_eq!(anim.value(now), 0.0);
    }

    #[test]
    fn test_slides_to_target() {
        let start = Instant::now();
        let mut anim = ProgressAnimation::new(0.0, start);
        anim.retarget(1.0, start);

        assert!(anim.is_animating(start));
        let mid = anim.value(start + Duration::from_millis(250));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(anim.value(start + Duration::from_secs(1)), 1.0);
        assert!(!anim.is_animating(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let start = Instant::now();
        let mut anim = ProgressAnimation::new(0.5, start);
        anim.retarget(0.5, start);
        assert!(!anim.is_animating(start));
    }
}
