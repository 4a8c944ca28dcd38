use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use weather_monitor::cli::{Cli, Commands, Session, run_menu, run_sample};
use weather_monitor::config::{self, Config};

fn init_logger(verbose: bool) {
    // Quiet by default so log lines don't interleave with the menu
    let default_filter = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn main() {
    // Load .env file before anything else
    config::load_dotenv();

    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = Config::from_env();
    if cli.seed.is_some() {
        config.source.seed = cli.seed;
    }
    info!("Configuration loaded:");
    info!("  Source: {}", config.source.kind);
    info!("  Display scale: {}", config.display.scale);
    info!("  Seed: {:?}", config.source.seed);

    let mut session = Session::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        None | Some(Commands::Interactive) => {
            let stdin = io::stdin();
            run_menu(&mut session, &mut stdin.lock(), &mut out)
        }
        Some(Commands::Sample(args)) => run_sample(&mut session, args, &mut out, &mut io::stderr()),
    };

    if let Err(e) = result {
        let _ = out.flush();
        error!("{}", e);
        eprintln!("weather-monitor: {}", e);
        let code = if e.is_invalid_argument() { 2 } else { 1 };
        std::process::exit(code);
    }
}
