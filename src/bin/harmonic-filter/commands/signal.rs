use crate::cli::{FilterArg, Format, SignalArgs};
use crate::exit_codes;
use crate::output;
use anyhow::Context;
use harmonic_filter::{Config, DEFAULT_ORDER, FilterKind, NoisePolicy, ParamRange, Ranges};

pub fn execute(args: SignalArgs) -> i32 {
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    match run(&config, &args) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::EXECUTION_ERROR
        }
    }
}

fn run(config: &Config, args: &SignalArgs) -> anyhow::Result<()> {
    let mut session = config.session().context("Invalid time grid")?;
    let frame = session.frame().context("Failed to compute frame")?;
    log::info!(
        "computed {} samples with {:?}",
        frame.len(),
        session.filter()
    );

    let text = match args.format {
        Format::Csv => output::to_csv(&["t", "clean", "signal", "filtered"], frame.rows())?,
        Format::Json => output::to_json(&frame, args.compact)?,
    };
    output::write_output(&text, args.output.as_deref())
}

/// Config file (or defaults) with command-line overrides, clamped to the
/// control ranges.
fn build_config(args: &SignalArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("Failed to load config '{}'", path))?
        }
        None => Config::default(),
    };

    let signal = &mut config.signal;
    if let Some(amplitude) = args.amplitude {
        signal.amplitude = amplitude;
    }
    if let Some(frequency) = args.frequency {
        signal.frequency = frequency;
    }
    if let Some(phase) = args.phase {
        signal.phase = phase;
    }
    if let Some(mean) = args.noise_mean {
        signal.noise_mean = mean;
    }
    if let Some(variance) = args.noise_variance {
        signal.noise_variance = variance;
    }
    if args.hide_noise {
        signal.show_noise = false;
    }

    config.filter = override_filter(config.filter, args);
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.fresh_noise {
        config.noise_policy = NoisePolicy::Fresh;
    }

    let ranges = Ranges::default();
    warn_if_clamped("amplitude", &ranges.amplitude, config.signal.amplitude);
    warn_if_clamped("frequency", &ranges.frequency, config.signal.frequency);
    warn_if_clamped("phase", &ranges.phase, config.signal.phase);
    warn_if_clamped("noise mean", &ranges.noise_mean, config.signal.noise_mean);
    warn_if_clamped("noise variance", &ranges.noise_variance, config.signal.noise_variance);
    match config.filter {
        FilterKind::LowPass { cutoff, .. } => warn_if_clamped("cutoff", &ranges.cutoff, cutoff),
        FilterKind::MovingAverage { window } => {
            warn_if_clamped("window", &ranges.window, window as f64)
        }
    }
    config.signal = ranges.clamp_params(&config.signal);
    config.filter = ranges.clamp_filter(&config.filter);

    Ok(config)
}

fn override_filter(current: FilterKind, args: &SignalArgs) -> FilterKind {
    let kind = match (args.filter, current) {
        (Some(FilterArg::Lowpass), FilterKind::MovingAverage { .. }) => FilterKind::LowPass {
            cutoff: 1.0,
            order: DEFAULT_ORDER,
        },
        (Some(FilterArg::MovingAverage), FilterKind::LowPass { .. }) => {
            FilterKind::MovingAverage { window: 5 }
        }
        _ => current,
    };

    match kind {
        FilterKind::LowPass { cutoff, order } => FilterKind::LowPass {
            cutoff: args.cutoff.unwrap_or(cutoff),
            order: args.order.unwrap_or(order),
        },
        FilterKind::MovingAverage { window } => FilterKind::MovingAverage {
            window: args.window.unwrap_or(window),
        },
    }
}

fn warn_if_clamped(name: &str, range: &ParamRange, value: f64) {
    if !range.contains(value) {
        log::warn!(
            "{} {} outside [{}, {}], clamping",
            name,
            value,
            range.min,
            range.max
        );
    }
}
