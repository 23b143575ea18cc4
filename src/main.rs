//! Warpspec - control-to-parameter value warping

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;
use warpspec::config::{self, WarpConfig, EXAMPLE_CONFIG};
use warpspec::spec::{default_names, default_spec, WarpSpec};
use warpspec::{amp_to_db, db_to_amp, freq_to_midi, midi_to_freq};

mod cli;

use cli::{Cli, Commands, Conversion};

#[derive(Serialize)]
struct ListedSpec<'a> {
    name: &'a str,
    source: &'static str,
    #[serde(flatten)]
    spec: WarpSpec,
}

fn load(path: Option<&std::path::Path>) -> Result<WarpConfig> {
    match path {
        Some(path) => config::load_config(path),
        None => Ok(WarpConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map {
            spec,
            value,
            config,
        } => {
            let cfg = load(config.as_deref())?;
            let warp = cfg.resolve(&spec)?;
            println!("{}", warp.map(value));
        }

        Commands::Unmap {
            spec,
            value,
            config,
        } => {
            let cfg = load(config.as_deref())?;
            let warp = cfg.resolve(&spec)?;
            println!("{}", warp.unmap(value));
        }

        Commands::Table {
            spec,
            steps,
            config,
        } => {
            if steps == 0 {
                bail!("Table needs at least one step");
            }
            let cfg = load(config.as_deref())?;
            let warp = cfg.resolve(&spec)?;

            println!(
                "{} ({} .. {}, {})",
                spec,
                warp.minval(),
                warp.maxval(),
                warp.curve()
            );
            for i in 0..=steps {
                let control = i as f64 / steps as f64;
                println!("  {:>6.3}  {}", control, warp.map(control));
            }
        }

        Commands::List { json, config } => {
            let cfg = load(config.as_deref())?;

            let mut listed = Vec::new();
            for name in default_names() {
                listed.push(ListedSpec {
                    name,
                    source: "default",
                    spec: default_spec(name)?,
                });
            }
            for name in cfg.names() {
                listed.push(ListedSpec {
                    name,
                    source: "config",
                    spec: cfg.resolve(name)?,
                });
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else {
                for entry in &listed {
                    println!(
                        "{:<16} {:>12} .. {:<12} {:<8} {}",
                        entry.name,
                        entry.spec.minval(),
                        entry.spec.maxval(),
                        entry.spec.curve(),
                        entry.source
                    );
                }
            }
        }

        Commands::Convert { conversion, value } => {
            let result = match conversion {
                Conversion::DbToAmp => db_to_amp(value),
                Conversion::AmpToDb => amp_to_db(value),
                Conversion::MidiToFreq => midi_to_freq(value),
                Conversion::FreqToMidi => freq_to_midi(value),
            };
            println!("{}", result);
        }

        Commands::Check { config: config_path } => {
            println!("Checking {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;
            println!("Configuration is valid!");
            println!("  Specs: {}", cfg.specs.len());
            for (name, spec) in &cfg.specs {
                println!("    - {} ({} .. {}, {})", name, spec.min, spec.max, spec.curve);
            }
        }

        Commands::Init => {
            print!("{}", EXAMPLE_CONFIG);
        }
    }

    Ok(())
}
