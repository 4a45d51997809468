//! Count-up animation for the stats band: start to end over a fixed
//! duration, triggered once on first visibility, holding at end afterwards.

/// Animation length carried over from the original site (2000ms).
pub const COUNT_UP_DURATION_SECS: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    start: i64,
    end: i64,
    duration_secs: f64,
    started_at: Option<f64>,
    done: bool,
}

impl CountUp {
    pub fn new(start: i64, end: i64, duration_secs: f64) -> Self {
        Self {
            start,
            end,
            duration_secs,
            started_at: None,
            done: false,
        }
    }

    /// First visibility starts the run; later calls are no-ops, so the
    /// animation cannot restart within the same mount.
    pub fn trigger(&mut self, now: f64) {
        if self.started_at.is_none() && !self.done {
            self.started_at = Some(now);
        }
    }

    /// Displayed value for a monotonically non-decreasing `now`.
    pub fn value(&mut self, now: f64) -> i64 {
        if self.done {
            return self.end;
        }
        let Some(started_at) = self.started_at else {
            return self.start;
        };
        if self.duration_secs <= 0.0 {
            self.done = true;
            return self.end;
        }
        let progress = ((now - started_at) / self.duration_secs).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.done = true;
            return self.end;
        }
        self.start + ((self.end - self.start) as f64 * progress).floor() as i64
    }

    pub fn is_animating(&self) -> bool {
        self.started_at.is_some() && !self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_the_start_value_until_triggered() {
        let mut counter = CountUp::new(0, 5000, 2.0);
        assert_eq!(counter.value(10.0), 0);
        assert!(!counter.is_animating());
    }

    #[test]
    fn rises_monotonically_and_holds_at_end() {
        let mut counter = CountUp::new(0, 98, 2.0);
        counter.trigger(1.0);
        let mut last = counter.value(1.0);
        for step in 1..=40 {
            let now = 1.0 + f64::from(step) * 0.1;
            let value = counter.value(now);
            assert!(value >= last, "regressed at {now}");
            last = value;
        }
        assert_eq!(last, 98);
        assert_eq!(counter.value(1000.0), 98);
        assert!(!counter.is_animating());
    }

    #[test]
    fn cannot_restart_after_completing() {
        let mut counter = CountUp::new(0, 12, 2.0);
        counter.trigger(0.0);
        assert_eq!(counter.value(2.0), 12);
        counter.trigger(50.0);
        assert_eq!(counter.value(50.5), 12);
        assert!(!counter.is_animating());
    }

    #[test]
    fn midpoint_shows_the_floored_interpolation() {
        let mut counter = CountUp::new(0, 25, 2.0);
        counter.trigger(0.0);
        assert_eq!(counter.value(1.0), 12);
    }
}
