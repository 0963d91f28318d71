use std::process::ExitCode;

use mtag_stops::config::{AppConfig, ConfigError, RouteSelection};
use mtag_stops::domain::Station;
use mtag_stops::lines::{fetch_lines, fetch_stations};
use mtag_stops::schedule::{FixtureSource, MtagClient, ScheduleError, ScheduleSource};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Anything that stops the run.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries station listings.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RunError> {
    let config = AppConfig::from_env()?;

    let source = match &config.fixtures_dir {
        Some(dir) => ScheduleSource::from(FixtureSource::load(dir)?),
        None => ScheduleSource::from(MtagClient::new(config.client_config())?),
    };

    match &config.routes {
        RouteSelection::Single(route) => {
            // Extract everything before printing anything.
            let stations = fetch_stations(&source, route).await?;
            print_stations(&stations);
        }
        RouteSelection::All => {
            for line in fetch_lines(&source, &config.routes.routes()).await? {
                println!("== Line {} ==", line.route);
                print_stations(&line.stations);
            }
        }
    }

    Ok(())
}

fn print_stations(stations: &[Station]) {
    for station in stations {
        println!("{station}");
    }
}
