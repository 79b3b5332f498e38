//! Checkpoint naming and cadence
//!
//! EMA weights are saved every `save_interval` optimizer steps, at the end of
//! every epoch, and once more when training finishes. Step numbering is
//! global across epochs and starts at 1.

use std::fmt;
use std::iter;
use std::path::{Path, PathBuf};

use crate::config::DistillConfig;

/// Which save point a checkpoint file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckpointKind {
    /// Periodic save after the given global step
    Step(u64),
    /// Save at the end of the given epoch (1-based)
    Epoch(u32),
    /// Save after the last epoch
    Final,
}

impl CheckpointKind {
    pub fn file_name(&self) -> String {
        match self {
            CheckpointKind::Step(step) => format!("consistency_model_step_{step}.pt"),
            CheckpointKind::Epoch(epoch) => format!("consistency_model_epoch_{epoch}.pt"),
            CheckpointKind::Final => "consistency_model_final.pt".to_string(),
        }
    }
}

impl fmt::Display for CheckpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckpointKind::Step(step) => write!(f, "step {step}"),
            CheckpointKind::Epoch(epoch) => write!(f, "epoch {epoch}"),
            CheckpointKind::Final => write!(f, "final"),
        }
    }
}

/// Where and when a run saves checkpoints
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointPlan {
    output_dir: PathBuf,
    save_interval: u64,
    steps_per_epoch: u64,
    num_epochs: u32,
}

impl CheckpointPlan {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        save_interval: u64,
        steps_per_epoch: u64,
        num_epochs: u32,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            save_interval,
            steps_per_epoch,
            num_epochs,
        }
    }

    pub fn from_config(config: &DistillConfig, steps_per_epoch: u64) -> Self {
        Self::new(
            &config.output_dir,
            config.save_interval,
            steps_per_epoch,
            config.num_epochs,
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Total optimizer steps over the whole run.
    pub fn total_steps(&self) -> u64 {
        self.steps_per_epoch.saturating_mul(u64::from(self.num_epochs))
    }

    /// Whether a periodic checkpoint is taken right after `step`.
    pub fn should_save(&self, step: u64) -> bool {
        step > 0 && self.save_interval > 0 && step % self.save_interval == 0
    }

    pub fn path(&self, kind: CheckpointKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Number of checkpoints the run writes, without enumerating them.
    pub fn checkpoint_count(&self) -> u64 {
        let step_saves = match self.save_interval {
            0 => 0,
            interval => self.total_steps() / interval,
        };
        step_saves
            .saturating_add(u64::from(self.num_epochs))
            .saturating_add(1)
    }

    /// Every checkpoint the run writes, in the order it writes them.
    ///
    /// Lazy: a run with millions of periodic saves is never materialized.
    pub fn planned(&self) -> impl Iterator<Item = CheckpointKind> + '_ {
        (1..=self.num_epochs)
            .flat_map(move |epoch| {
                self.step_saves_in(epoch)
                    .map(CheckpointKind::Step)
                    .chain(iter::once(CheckpointKind::Epoch(epoch)))
            })
            .chain(iter::once(CheckpointKind::Final))
    }

    /// Periodic save steps falling inside `epoch` (1-based).
    fn step_saves_in(&self, epoch: u32) -> impl Iterator<Item = u64> {
        let interval = self.save_interval;
        let start = self.steps_per_epoch.saturating_mul(u64::from(epoch - 1));
        let end = self.steps_per_epoch.saturating_mul(u64::from(epoch));

        // first multiple of the interval after `start`; None past u64::MAX
        let first = match interval {
            0 => None,
            _ => (start / interval)
                .checked_add(1)
                .and_then(|n| n.checked_mul(interval)),
        };

        iter::successors(first, move |step| step.checked_add(interval))
            .take_while(move |step| *step <= end)
    }
}
