use harmonic_filter::{
    FilterKind, NoiseCache, NoiseSource, Session, SignalParams, TimeGrid, recompute,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

fn demo_grid() -> TimeGrid {
    TimeGrid::new(0.0, 10.0, 0.01).unwrap()
}

#[test]
fn test_noiseless_window_one_reproduces_harmonic() {
    let grid = demo_grid();
    let params = SignalParams {
        amplitude: 1.0,
        frequency: 1.0,
        phase: 0.0,
        show_noise: false,
        ..SignalParams::default()
    };
    let mut cache = NoiseCache::with_rng(StdRng::seed_from_u64(0));
    let frame = recompute(
        &grid,
        &params,
        &FilterKind::MovingAverage { window: 1 },
        NoiseSource::Cached(&mut cache),
    )
    .unwrap();

    assert_eq!(frame.filtered.len(), 1000);
    for (t, y) in frame.time.iter().zip(&frame.filtered) {
        assert!((y - (2.0 * PI * t).sin()).abs() < 1e-12, "t = {t}");
    }
}

#[test]
fn test_lowpass_removes_most_noise() {
    let grid = demo_grid();
    let params = SignalParams {
        frequency: 0.5,
        noise_variance: 0.2,
        ..SignalParams::default()
    };
    let mut cache = NoiseCache::with_rng(StdRng::seed_from_u64(21));
    let frame = recompute(
        &grid,
        &params,
        &FilterKind::lowpass(2.0),
        NoiseSource::Cached(&mut cache),
    )
    .unwrap();

    // Energy past the start-up transient: the noisy signal carries the
    // extra noise power, the filtered one is back near the clean harmonic.
    let energy = |series: &[f64]| -> f64 { series[300..].iter().map(|s| s * s).sum() };
    let clean = energy(&frame.clean);

    assert!(energy(&frame.signal) / clean > 1.2);
    assert!((energy(&frame.filtered) / clean - 1.0).abs() < 0.1);
}

#[test]
fn test_moving_average_leading_edge() {
    let grid = demo_grid();
    let noise: Vec<f64> = (0..grid.len()).map(|i| ((i * 7) % 11) as f64 * 0.01).collect();
    let frame = recompute::<StdRng>(
        &grid,
        &SignalParams {
            phase: 1.0,
            ..SignalParams::default()
        },
        &FilterKind::MovingAverage { window: 8 },
        NoiseSource::Explicit(&noise),
    )
    .unwrap();

    assert!(frame.filtered[..7].iter().all(|&s| s == frame.signal[0]));
    let expected = frame.signal[..8].iter().sum::<f64>() / 8.0;
    assert!((frame.filtered[7] - expected).abs() < 1e-12);
}

#[test]
fn test_session_update_cycle() {
    let mut session = Session::with_rng(
        demo_grid(),
        SignalParams::default(),
        FilterKind::MovingAverage { window: 5 },
        StdRng::seed_from_u64(77),
    );

    let first = session.frame().unwrap();
    let again = session.frame().unwrap();
    assert_eq!(first, again);

    session.set_filter(FilterKind::lowpass(1.0));
    let lowpassed = session.frame().unwrap();
    assert_eq!(lowpassed.signal, first.signal);
    assert_ne!(lowpassed.filtered, first.filtered);

    session.update(SignalParams {
        noise_variance: -0.5,
        ..*session.params()
    });
    assert!(session.frame().is_err());
}
