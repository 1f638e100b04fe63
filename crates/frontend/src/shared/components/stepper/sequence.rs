//! Step bookkeeping for multi-step forms, free of any UI types.

/// Display status of a single step, derived from its index and the active step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "stepper__step--completed",
            StepStatus::Active => "stepper__step--active",
            StepStatus::Pending => "stepper__step--pending",
        }
    }
}

/// Position inside a fixed-length sequence of steps.
///
/// `active_step` is always within `0..total_steps`. Requests that would move
/// it outside that range are ignored without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequence {
    total: usize,
    active: usize,
}

impl StepSequence {
    /// A sequence always has at least one step
    pub fn new(total_steps: usize) -> Self {
        Self {
            total: total_steps.max(1),
            active: 0,
        }
    }

    pub fn total_steps(&self) -> usize {
        self.total
    }

    pub fn active_step(&self) -> usize {
        self.active
    }

    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 == self.total
    }

    /// Move to `step` if it exists. Returns `true` when the request was in range.
    pub fn set_active_step(&mut self, step: usize) -> bool {
        if step < self.total {
            self.active = step;
            true
        } else {
            false
        }
    }

    pub fn go_to_next_step(&mut self) {
        let next = (self.active + 1).min(self.total - 1);
        self.set_active_step(next);
    }

    pub fn go_to_prev_step(&mut self) {
        let prev = self.active.saturating_sub(1);
        self.set_active_step(prev);
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    pub fn is_completed(&self, step: usize) -> bool {
        step < self.active
    }

    pub fn is_active(&self, step: usize) -> bool {
        step == self.active
    }

    /// Indicators only jump back to finished steps or stay on the current one
    pub fn is_clickable(&self, step: usize) -> bool {
        step <= self.active
    }

    pub fn status(&self, step: usize) -> StepStatus {
        if self.is_completed(step) {
            StepStatus::Completed
        } else if self.is_active(step) {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// Share of the track covered by the progress bar, in `0.0..=1.0`
    pub fn progress_fraction(&self) -> f64 {
        if self.total <= 1 {
            0.0
        } else {
            self.active as f64 / (self.total - 1) as f64
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_positions() -> impl Iterator<Item = StepSequence> {
        (1..=6).flat_map(|total| {
            (0..total).map(move |active| {
                let mut seq = StepSequence::new(total);
                seq.set_active_step(active);
                seq
            })
        })
    }

    #[test]
    fn test_zero_steps_is_promoted_to_one() {
        let seq = StepSequence::new(0);
        assert_eq!(seq.total_steps(), 1);
        assert!(seq.is_first() && seq.is_last());
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        for seq in all_positions() {
            let mut moved = seq;
            assert!(!moved.set_active_step(seq.total_steps()));
            assert!(!moved.set_active_step(usize::MAX));
            assert_eq!(moved, seq);
        }
    }

    #[test]
    fn test_next_then_prev_returns_to_origin_except_at_last() {
        for seq in all_positions() {
            let mut walked = seq;
            walked.go_to_next_step();
            walked.go_to_prev_step();
            if seq.is_last() && seq.total_steps() > 1 {
                assert_eq!(walked.active_step(), seq.active_step() - 1);
            } else {
                assert_eq!(walked, seq);
            }
        }
    }

    #[test]
    fn test_next_and_prev_clamp_at_edges() {
        let mut seq = StepSequence::new(3);
        seq.go_to_prev_step();
        assert_eq!(seq.active_step(), 0);

        seq.set_active_step(2);
        seq.go_to_next_step();
        assert_eq!(seq.active_step(), 2);
    }

    #[test]
    fn test_exactly_one_status_per_step() {
        for seq in all_positions() {
            for step in 0..seq.total_steps() {
                let flags = [
                    seq.is_completed(step),
                    seq.is_active(step),
                    !seq.is_completed(step) && !seq.is_active(step),
                ];
                assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            }
            assert_eq!(seq.status(seq.active_step()), StepStatus::Active);
        }
    }

    #[test]
    fn test_clickable_steps() {
        let mut seq = StepSequence::new(3);
        seq.set_active_step(1);
        assert!(seq.is_clickable(0));
        assert!(seq.is_clickable(1));
        assert!(!seq.is_clickable(2));
    }

    #[test]
    fn test_progress_fraction() {
        let mut seq = StepSequence::new(3);
        assert_eq!(seq.progress_fraction(), 0.0);
        seq.set_active_step(1);
        assert_eq!(seq.progress_fraction(), 0.5);
        seq.set_active_step(2);
        assert_eq!(seq.progress_fraction(), 1.0);
        assert_eq!(seq.progress_percent(), 100.0);

        assert_eq!(StepSequence::new(1).progress_fraction(), 0.0);
    }
}
