use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "harmonic-filter",
    version,
    about = "Harmonic signal, Gaussian noise and smoothing filters",
    long_about = "Generate a noisy harmonic over a time grid, smooth it with a low-pass or \
                  moving-average filter and print the series for plotting.\n\
                  The `drought` command filters a weekly VCI/TCI/VHI table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute one frame: harmonic, noisy signal and filtered signal
    Signal(SignalArgs),
    /// Select one region's weekly index values for a year
    Drought(DroughtArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Lowpass,
    MovingAverage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

#[derive(Args)]
pub struct SignalArgs {
    /// JSON config file; flags override its values
    #[arg(long, env = "HARMONIC_FILTER_CONFIG")]
    pub config: Option<String>,

    /// Harmonic amplitude (0.1 - 10.0)
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Harmonic frequency (0.1 - 10.0)
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Harmonic phase in radians (0 - 2π)
    #[arg(long, allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Noise mean (-1.0 - 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub noise_mean: Option<f64>,

    /// Noise variance (0.0 - 1.0)
    #[arg(long)]
    pub noise_variance: Option<f64>,

    /// Leave noise out of the signal
    #[arg(long, default_value_t = false)]
    pub hide_noise: bool,

    /// Filter to apply
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Low-pass cutoff frequency (0.1 - 5.0)
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Low-pass filter order
    #[arg(long)]
    pub order: Option<usize>,

    /// Moving-average window in samples (1 - 50)
    #[arg(long)]
    pub window: Option<usize>,

    /// Seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw new noise instead of reusing memoized noise
    #[arg(long, default_value_t = false)]
    pub fresh_noise: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

#[derive(Args)]
pub struct DroughtArgs {
    /// CSV table with year, week, ID, VCI, TCI, VHI columns
    #[arg(long)]
    pub file: String,

    /// Index to plot (VCI, TCI or VHI)
    #[arg(long, default_value = "VHI")]
    pub index: String,

    /// Year (1981 - 2023)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1981..=2023))]
    pub year: u32,

    /// Region ID (1 - 25)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=25))]
    pub region: u32,

    /// First week (1 - 52)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=52))]
    pub start_week: u32,

    /// Last week (1 - 52)
    #[arg(long, default_value_t = 52, value_parser = clap::value_parser!(u32).range(1..=52))]
    pub end_week: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress the chart title on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
