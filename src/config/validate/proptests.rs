//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::options::{FDivergence, MixedPrecision, SchedulerType, TimestepSpacing};
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_divergence() -> impl Strategy<Value = FDivergence> {
    prop::sample::select(FDivergence::ALL.to_vec())
}

fn arb_valid_config() -> impl Strategy<Value = DistillConfig> {
    (
        arb_divergence(),
        1u32..100,       // num_epochs
        1e-8f64..1e-2,   // learning_rate
        1u32..256,       // batch_size
        1u64..10_000,    // save_interval
        0.0f64..20.0,    // cfg_scale
        0.001f64..0.9999, // ema_rate
        (0.0f64..1.0, 1.0f64..200.0), // sigma_min, sigma_max
        1u32..16,        // gradient_accumulation_steps
    )
        .prop_map(
            |(
                divergence,
                num_epochs,
                learning_rate,
                batch_size,
                save_interval,
                cfg_scale,
                ema_rate,
                (sigma_min, sigma_max),
                gradient_accumulation_steps,
            )| {
                let mut config = DistillConfig::new("./ckpt", divergence);
                config.num_epochs = num_epochs;
                config.learning_rate = learning_rate;
                config.batch_size = batch_size;
                config.save_interval = save_interval;
                config.cfg_scale = cfg_scale;
                config.consistency_training.ema_rate = ema_rate;
                config.consistency_training.sigma_min = sigma_min;
                config.consistency_training.sigma_max = sigma_max;
                config.gradient_accumulation_steps = gradient_accumulation_steps;
                config
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_batch_size_fails(config in arb_valid_config()) {
        let mut config = config;
        config.batch_size = 0;
        let result = validate_config(&config);
        let rejected = matches!(result, Err(ValidationError::InvalidBatchSize(0)));
        prop_assert!(rejected, "unexpected result: {:?}", result);
    }

    #[test]
    fn prop_non_positive_lr_fails(
        config in arb_valid_config(),
        lr in -1.0f64..=0.0
    ) {
        let mut config = config;
        config.learning_rate = lr;
        let result = validate_config(&config);
        let rejected = matches!(result, Err(ValidationError::InvalidLearningRate(_)));
        prop_assert!(rejected, "unexpected result: {:?}", result);
    }

    #[test]
    fn prop_sigma_min_not_below_max_fails(
        config in arb_valid_config(),
        sigma_max in 0.0f64..100.0,
        gap in 0.0f64..50.0
    ) {
        let mut config = config;
        config.consistency_training.sigma_max = sigma_max;
        config.consistency_training.sigma_min = sigma_max + gap;
        let result = validate_config(&config);
        let rejected = matches!(result, Err(ValidationError::InvalidSigmaRange { .. }));
        prop_assert!(rejected, "unexpected result: {:?}", result);
    }

    #[test]
    fn prop_ema_rate_outside_unit_interval_fails(
        config in arb_valid_config(),
        rate in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0]
    ) {
        let mut config = config;
        config.consistency_training.ema_rate = rate;
        let result = validate_config(&config);
        let rejected = matches!(result, Err(ValidationError::InvalidEmaRate(_)));
        prop_assert!(rejected, "unexpected result: {:?}", result);
    }

    #[test]
    fn prop_enum_choices_never_affect_validity(
        config in arb_valid_config(),
        scheduler in prop::sample::select(SchedulerType::ALL.to_vec()),
        spacing in prop::sample::select(TimestepSpacing::ALL.to_vec()),
        precision in prop::sample::select(MixedPrecision::ALL.to_vec())
    ) {
        let mut config = config;
        config.scheduler_type = scheduler;
        config.noise_scheduler.timestep_spacing = spacing;
        config.mixed_precision = precision;
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_valid_config_survives_yaml_roundtrip(config in arb_valid_config()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reloaded: DistillConfig = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(reloaded, config);
    }
}
