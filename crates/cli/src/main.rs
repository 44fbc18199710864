#![warn(clippy::pedantic)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use log::{error, info};
use pace_domain::{Workout, read_package};

mod settings;

use settings::{OutputFormat, Settings};

const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from_env();
    info!("using {settings:?}");

    let stdout = io::stdout();
    match run(settings, &PACKAGES, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    settings: Settings,
    packages: &[(&str, &[f64])],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (code, data) in packages {
        let training =
            read_package(code, data).with_context(|| format!("failed to read {code} package"))?;
        let summary = training.summary();
        match settings.output {
            OutputFormat::Text => writeln!(out, "{}", summary.message(settings.language))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &summary)?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}
