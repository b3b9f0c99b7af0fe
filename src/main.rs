//! The CLI interface for modepick
//!
//! Use the `--help` flag to see the available options.
use std::process::ExitCode;

use color_eyre::eyre::Result;
use modepick::{ConfigureError, Options};
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "modepick",
    about = "Switches the preferred output to its best widescreen mode."
)]
struct Opts {
    /// X display to connect to, defaults to $DISPLAY
    #[structopt(short, long)]
    display: Option<String>,
    /// Pick the mode but do not apply it
    #[structopt(short = "n", long)]
    dry_run: bool,
    /// Output debug info
    #[structopt(short, long)]
    verbose: bool,
}

/// Entry point for `modepick`.
fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str()))
        .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    let options = Options {
        dry_run: opts.dry_run,
    };

    match run(opts.display.as_deref(), &options) {
        Ok(outcome) => {
            log::info!("{}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(ConfigureError::Select(err)) => {
            log::warn!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(ConfigureError::Apply(err)) => {
            match std::error::Error::source(&err) {
                Some(source) => log::error!("{}: {}", err, source),
                None => log::error!("{}", err),
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

/// Runs one configuration pass; the display connection is closed before this returns
#[cfg(all(target_family = "unix", feature = "unix-x11"))]
fn run(display: Option<&str>, options: &Options) -> Result<modepick::Outcome, ConfigureError> {
    let service = modepick::platforms::unix::X11Service::connect(display)?;
    log::debug!("{:?}", service);

    modepick::configure(&service, options)
}

#[cfg(not(all(target_family = "unix", feature = "unix-x11")))]
fn run(_display: Option<&str>, _options: &Options) -> Result<modepick::Outcome, ConfigureError> {
    Err(modepick::ServiceError::Connect(
        "no display backend compiled in; enable the `unix-x11` feature".to_string(),
    )
    .into())
}
