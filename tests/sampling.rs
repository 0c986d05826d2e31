use diverge::config::SamplingConfig;
use diverge::error::SampleError;
use diverge::integrator::{IntegrationScheme, SymplecticEuler};
use diverge::kinematics::{displacement, GRAVITY};
use diverge::sampling::sample;

#[test]
fn default_run_has_aligned_series_of_101() {
    let s = sample(&SamplingConfig::default()).unwrap();
    let expected_time: Vec<f64> = (0..=100).map(|k| k as f64 * 10.0).collect();
    assert_eq!(s.time, expected_time);
    assert_eq!(s.len(), 101);
    assert_eq!(s.closed_form.len(), 101);
    assert_eq!(s.stepwise.len(), 101);
    assert_eq!(s.difference.len(), 101);
}

#[test]
fn series_start_with_leading_zero() {
    let s = sample(&SamplingConfig::default()).unwrap();
    let first = s.row(0).unwrap();
    assert_eq!(first.time, 0.0);
    assert_eq!(first.closed_form, 0.0);
    assert_eq!(first.stepwise, 0.0);
    assert_eq!(first.difference, 0.0);
}

#[test]
fn default_run_values() {
    let s = sample(&SamplingConfig::default()).unwrap();
    assert!((s.stepwise[1] - 981.0).abs() < 1e-9);
    assert!((s.stepwise[2] - 2943.0).abs() < 1e-9);
    assert!((s.stepwise[3] - 5886.0).abs() < 1e-9);
    assert!((s.closed_form[100] - 4_905_000.0).abs() < 1e-6);
    for (k, &t) in s.time.iter().enumerate() {
        assert_eq!(s.closed_form[k], displacement(GRAVITY, t));
    }
}

#[test]
fn difference_is_stepwise_minus_closed_form() {
    let s = sample(&SamplingConfig::default()).unwrap();
    for row in s.rows() {
        assert_eq!(row.difference, row.stepwise - row.closed_form);
    }
    // symplectic Euler runs ahead by g * dt^2 * n / 2 after n steps
    for n in 1..=100 {
        let expected = GRAVITY * 100.0 * n as f64 / 2.0;
        assert!((s.difference[n] - expected).abs() < 1e-6 * expected);
    }
}

#[test]
fn explicit_scheme_lags_behind_closed_form() {
    let cfg = SamplingConfig {
        scheme: IntegrationScheme::ExplicitEuler,
        ..Default::default()
    };
    let s = sample(&cfg).unwrap();
    for n in 1..=100 {
        let expected = -GRAVITY * 100.0 * n as f64 / 2.0;
        assert!((s.difference[n] - expected).abs() < 1e-6 * expected.abs());
    }
}

#[test]
fn sample_rate_above_one_still_steps_every_iteration() {
    let cfg = SamplingConfig {
        sample_rate: 3,
        n_samples: 5,
        ..Default::default()
    };
    let s = sample(&cfg).unwrap();
    assert_eq!(s.len(), 6);

    let reference: Vec<f64> = SymplecticEuler::new(cfg.dt, cfg.gravity).take(15).collect();
    for k in 1..=5 {
        let i = 3 * k;
        assert_eq!(s.time[k], i as f64 * cfg.dt);
        // value of underlying step i, not of step k
        assert_eq!(s.stepwise[k], reference[i - 1]);
        assert_eq!(s.closed_form[k], displacement(cfg.gravity, s.time[k]));
    }
}

#[test]
fn lengths_stay_aligned_across_configurations() {
    for rate in 1..=4 {
        for n in [1usize, 2, 7, 30] {
            let cfg = SamplingConfig {
                sample_rate: rate,
                n_samples: n,
                dt: 0.25,
                ..Default::default()
            };
            let s = sample(&cfg).unwrap();
            assert_eq!(s.len(), n + 1);
            assert_eq!(s.difference.len(), s.time.len());
            assert_eq!(s.rows().count(), n + 1);
            assert!(s.time.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn rejects_invalid_parameters() {
    let zero_rate = SamplingConfig {
        sample_rate: 0,
        ..Default::default()
    };
    assert_eq!(sample(&zero_rate), Err(SampleError::ZeroSampleRate));

    let zero_count = SamplingConfig {
        n_samples: 0,
        ..Default::default()
    };
    assert_eq!(sample(&zero_count), Err(SampleError::ZeroSampleCount));

    let bad_step = SamplingConfig {
        dt: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(sample(&bad_step), Err(SampleError::InvalidStep(_))));

    let negative_step = SamplingConfig {
        dt: -1.0,
        ..Default::default()
    };
    assert_eq!(sample(&negative_step), Err(SampleError::InvalidStep(-1.0)));
}

#[test]
fn summary_accessors() {
    let s = sample(&SamplingConfig::default()).unwrap();
    let last = s.last().unwrap();
    assert_eq!(last.time, 1000.0);
    assert!((s.max_abs_difference() - 49_050.0).abs() < 1e-3);
    assert!(s.row(101).is_none());
    assert!(!s.is_empty());
}
