//! Command-line front end.
//!
//! `weather-monitor` runs the interactive menu; `weather-monitor sample`
//! collects readings and prints them without prompting.

mod menu;
mod sample;
mod session;

pub use menu::run_menu;
pub use sample::run_sample;
pub use session::Session;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "weather-monitor")]
#[command(about = "Synthetic weather monitoring with temperature alerts")]
pub struct Cli {
    /// Seed for the synthetic sources (overrides WEATHER_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Interactive,
    /// Collect readings and print them
    Sample(SampleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Data source: remote (api) or local (sensor)
    #[arg(long)]
    pub source: Option<String>,

    /// Number of readings to collect
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Display scale; unknown names fall back to Celsius
    #[arg(long)]
    pub scale: Option<String>,

    /// Warn when the temperature drops below this threshold
    #[arg(long, allow_negative_numbers = true)]
    pub alert: Option<f64>,

    /// Unit of the alert threshold
    #[arg(long, default_value = "Celsius")]
    pub alert_unit: String,

    /// Print one JSON report per line
    #[arg(long)]
    pub json: bool,
}
