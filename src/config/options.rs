//! Closed value sets used by the configuration schema.
//!
//! Each enum serializes with the exact spelling used in the YAML document and
//! also parses case-insensitively from CLI strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Case-insensitive lookup of `s` among `all` by their document spelling.
fn parse_closed<T: Copy>(
    s: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    label: &str,
) -> Result<T, String> {
    let wanted = s.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|v| as_str(*v) == wanted)
        .ok_or_else(|| {
            let valid: Vec<&str> = all.iter().map(|v| as_str(*v)).collect();
            format!("Unknown {label}: {s}. Valid values: {}", valid.join(", "))
        })
}

/// Divergence family used as the distillation objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FDivergence {
    /// KL(student || teacher), mode seeking
    ReverseKl,
    /// KL(teacher || student), mass covering
    ForwardKl,
    /// Jensen-Shannon divergence
    JensenShannon,
    /// Squared Hellinger distance
    SquaredHellinger,
    /// Reverse KL softened by mixing in the forward direction
    SoftenedRkl,
}

impl FDivergence {
    /// Every member of the family, in document order.
    pub const ALL: [FDivergence; 5] = [
        FDivergence::ReverseKl,
        FDivergence::ForwardKl,
        FDivergence::JensenShannon,
        FDivergence::SquaredHellinger,
        FDivergence::SoftenedRkl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FDivergence::ReverseKl => "reverse-kl",
            FDivergence::ForwardKl => "forward-kl",
            FDivergence::JensenShannon => "jensen-shannon",
            FDivergence::SquaredHellinger => "squared-hellinger",
            FDivergence::SoftenedRkl => "softened-rkl",
        }
    }

    /// Whether D(p || q) == D(q || p) for this divergence.
    pub fn is_symmetric(self) -> bool {
        matches!(
            self,
            FDivergence::JensenShannon | FDivergence::SquaredHellinger
        )
    }
}

impl fmt::Display for FDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FDivergence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ALL, Self::as_str, "f-divergence")
    }
}

/// Learning rate schedule applied after warmup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerType {
    /// Linear decay to zero
    Linear,
    /// Half-cosine decay to zero
    Cosine,
    /// Hold the peak learning rate
    #[default]
    Constant,
}

impl SchedulerType {
    pub const ALL: [SchedulerType; 3] = [
        SchedulerType::Linear,
        SchedulerType::Cosine,
        SchedulerType::Constant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchedulerType::Linear => "linear",
            SchedulerType::Cosine => "cosine",
            SchedulerType::Constant => "constant",
        }
    }
}

impl fmt::Display for SchedulerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ALL, Self::as_str, "scheduler type")
    }
}

/// How inference timesteps are spaced across the noise schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestepSpacing {
    Leading,
    #[default]
    Trailing,
    Uniform,
}

impl TimestepSpacing {
    pub const ALL: [TimestepSpacing; 3] = [
        TimestepSpacing::Leading,
        TimestepSpacing::Trailing,
        TimestepSpacing::Uniform,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimestepSpacing::Leading => "leading",
            TimestepSpacing::Trailing => "trailing",
            TimestepSpacing::Uniform => "uniform",
        }
    }
}

impl fmt::Display for TimestepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestepSpacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ALL, Self::as_str, "timestep spacing")
    }
}

/// Numeric format used for activations and gradients during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixedPrecision {
    /// Full fp32 training
    No,
    /// FP16 mixed precision
    Fp16,
    /// BF16 mixed precision
    #[default]
    Bf16,
}

impl MixedPrecision {
    pub const ALL: [MixedPrecision; 3] = [
        MixedPrecision::No,
        MixedPrecision::Fp16,
        MixedPrecision::Bf16,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MixedPrecision::No => "no",
            MixedPrecision::Fp16 => "fp16",
            MixedPrecision::Bf16 => "bf16",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != MixedPrecision::No
    }
}

impl fmt::Display for MixedPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MixedPrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ALL, Self::as_str, "mixed precision mode")
    }
}
