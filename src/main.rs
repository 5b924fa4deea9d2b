use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

use quakemap::config_params::Config;
use quakemap::layer::data_extent;
use quakemap::record::load_records;
use quakemap::render::{self, Converter};
use quakemap::{Panel, Result};

#[derive(Parser)]
#[command(name = "quakemap", version, about = "Render earthquake events as a time-filtered scatter map")]
struct Args {
    /// Input configuration file to use (.toml).
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Start of the filter range, in days since 1970-01-01.
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    from: Option<f64>,

    /// End of the filter range, in days since 1970-01-01.
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    to: Option<f64>,

    /// Verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(match args.verbose {
                            0 => tracing::Level::WARN,
                            1 => tracing::Level::INFO,
                            2 => tracing::Level::DEBUG,
                            _ => tracing::Level::TRACE,
                        })
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to install the log subscriber");
    }

    if let Err(err) = run(&args) {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(&args.input)?;
    if config.panel.access_token().is_none() {
        warn!("no base map access token configured");
    }
    let (width, height) = (config.map.width, config.map.height);
    let background = config.map.background.as_deref();

    let loaded = match config.map.data {
        Some(ref path) => load_records(path).map(Some),
        None => Ok(None),
    };
    let data = match loaded {
        Ok(data) => data,
        Err(err) => {
            // The panel still shows up, carrying the error instead of a map.
            let extent = config.map.extent.unwrap_or_else(|| config.view.extent(width, height));
            let converter = Converter::new(width, height, &extent)?;
            let document = converter.render_error(&config.panel.map_style, background, &err);
            render::save(&config.map.output, &document)?;
            return Err(err);
        }
    };

    let mut panel = Panel::new(config.panel.clone(), config.view, config.layer, data);
    if let (Some(from), Some(to)) = (args.from, args.to) {
        panel = panel.with_filter(from, to)?;
    }

    let wrap = panel.layer_params.wrap_longitude;
    let extent = config
        .map
        .extent
        .or_else(|| panel.data().and_then(|records| data_extent(records, wrap)))
        .unwrap_or_else(|| panel.view.extent(width, height));

    let converter = Converter::new(width, height, &extent)?;
    let document = converter.render(&panel, background)?;
    render::save(&config.map.output, &document)?;
    info!(output = %config.map.output.display(), "done");
    Ok(())
}
