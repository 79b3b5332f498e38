//! Learning rate schedules
//!
//! The generator learning rate warms up linearly from 0 over `warmup_steps`
//! and then follows `scheduler_type`:
//! - `constant` holds the peak rate
//! - `linear` decays to 0 at `total_steps`
//! - `cosine` follows a half cosine to 0 at `total_steps`
//!
//! Formula (cosine): lr_t = lr_peak * 0.5 * (1 + cos(π * p)), where
//! p = (t - warmup) / (total - warmup) clamped to [0, 1].

use std::f64::consts::PI;

use crate::config::{DistillConfig, SchedulerType};

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f64;

    /// Advance by one optimizer step
    fn step(&mut self);
}

/// Linear warmup followed by a constant, linear or cosine phase
#[derive(Debug, Clone, PartialEq)]
pub struct WarmupSchedule {
    kind: SchedulerType,
    peak_lr: f64,
    warmup_steps: u64,
    total_steps: u64,
    current_step: u64,
}

impl WarmupSchedule {
    /// Create a new schedule
    ///
    /// # Arguments
    /// * `kind` - Shape of the post-warmup phase
    /// * `peak_lr` - Learning rate reached at the end of warmup
    /// * `warmup_steps` - Number of warmup steps (0 disables warmup)
    /// * `total_steps` - Total optimizer steps, including warmup
    pub fn new(kind: SchedulerType, peak_lr: f64, warmup_steps: u64, total_steps: u64) -> Self {
        Self {
            kind,
            peak_lr,
            warmup_steps,
            total_steps,
            current_step: 0,
        }
    }

    /// Build the schedule a trainer would use for `config`.
    pub fn from_config(config: &DistillConfig, total_steps: u64) -> Self {
        Self::new(
            config.scheduler_type,
            config.learning_rate,
            config.warmup_steps,
            total_steps,
        )
    }

    pub fn kind(&self) -> SchedulerType {
        self.kind
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// Learning rate at an arbitrary step.
    pub fn lr_at(&self, step: u64) -> f64 {
        if step < self.warmup_steps {
            return self.peak_lr * step as f64 / self.warmup_steps as f64;
        }

        let progress = self.decay_progress(step);
        match self.kind {
            SchedulerType::Constant => self.peak_lr,
            SchedulerType::Linear => self.peak_lr * (1.0 - progress),
            SchedulerType::Cosine => self.peak_lr * 0.5 * (1.0 + (PI * progress).cos()),
        }
    }

    /// Fraction of the decay phase completed at `step`, in [0, 1].
    fn decay_progress(&self, step: u64) -> f64 {
        let decay_steps = self.total_steps.saturating_sub(self.warmup_steps);
        if decay_steps == 0 {
            return 1.0;
        }
        let elapsed = step.saturating_sub(self.warmup_steps);
        (elapsed as f64 / decay_steps as f64).min(1.0)
    }

    /// `points` evenly spaced `(step, lr)` samples from step 0 to `total_steps`.
    pub fn preview(&self, points: usize) -> Vec<(u64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(0, self.lr_at(0))],
            n => (0..n)
                .map(|i| {
                    let step = (self.total_steps as u128 * i as u128 / (n - 1) as u128) as u64;
                    (step, self.lr_at(step))
                })
                .collect(),
        }
    }
}

impl LRScheduler for WarmupSchedule {
    fn get_lr(&self) -> f64 {
        self.lr_at(self.current_step)
    }

    fn step(&mut self) {
        self.current_step = self.current_step.saturating_add(1);
    }
}
