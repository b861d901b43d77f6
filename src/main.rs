// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, Context, Result};
use keyscope::config::AppConfig;
use keyscope::music::{
    list_note_names, list_scale_types, sample_progression, ScaleEngine, DEFAULT_ROOT,
};
use keyscope::render::KeyReport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, Level};

fn print_usage() {
    println!("keyscope - Scale and key explorer");
    println!();
    println!("Usage: keyscope [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --key <NOTE>        Root note (default C)");
    println!("  --scale <NAME>      Scale type (default Major)");
    println!("  --count <N>         Chords in the random progression (default 4)");
    println!("  --seed <N>          Seed for a reproducible random progression");
    println!("  --config <PATH>     Read settings from a YAML file");
    println!("  --describe          Show interval names and chord links");
    println!("  --list-notes        List available root notes");
    println!("  --list-scales       List available scale types");
    println!("  --verbose           Log debug output to stderr");
    println!("  --help              Show this help message");
}

/// Parsed command-line options
#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    key: Option<String>,
    scale: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    describe: bool,
    verbose: bool,
    list_notes: bool,
    list_scales: bool,
    help: bool,
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--key" => {
                options.key = Some(option_value(args, i, flag)?.to_string());
                i += 1;
            }
            "--scale" => {
                options.scale = Some(option_value(args, i, flag)?.to_string());
                i += 1;
            }
            "--count" => {
                let value = option_value(args, i, flag)?;
                options.count = Some(
                    value
                        .parse()
                        .map_err(|_| anyhow!("Invalid chord count: {}", value))?,
                );
                i += 1;
            }
            "--seed" => {
                let value = option_value(args, i, flag)?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| anyhow!("Invalid seed: {}", value))?,
                );
                i += 1;
            }
            "--config" => {
                options.config = Some(option_value(args, i, flag)?.to_string());
                i += 1;
            }
            "--describe" => options.describe = true,
            "--verbose" | "-v" => options.verbose = true,
            "--list-notes" => options.list_notes = true,
            "--list-scales" => options.list_scales = true,
            "--help" | "-h" => options.help = true,
            _ => return Err(anyhow!("Unknown option: {}", flag)),
        }
        i += 1;
    }

    Ok(options)
}

fn list_notes() {
    for name in list_note_names() {
        if name == DEFAULT_ROOT.name() {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
}

fn list_scales() {
    for name in list_scale_types() {
        println!("{}", name);
    }
}

fn show_key(options: &Options) -> Result<()> {
    let mut config = match &options.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(key) = &options.key {
        config.key = key.clone();
    }
    if let Some(scale) = &options.scale {
        config.scale = scale.clone();
    }
    if let Some(count) = options.count {
        config.progression_length = count;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    config.show_descriptions |= options.describe;
    config.validate()?;
    debug!(?config, "resolved configuration");

    let engine = ScaleEngine::builtin().context("Builtin scale table is invalid")?;
    let key = engine.derive(config.root()?, config.scale_type()?)?;
    let links = config.links()?;

    let random = key.chord_symbols().map(|symbols| {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        sample_progression(&symbols, config.progression_length, &mut rng)
    });

    let mut report = KeyReport::new(&key, &links).with_descriptions(config.show_descriptions);
    if let Some(random) = &random {
        report = report.with_random(random);
    }
    print!("{}", report);
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    let level = if options.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if options.help {
        print_usage();
    } else if options.list_notes {
        list_notes();
    } else if options.list_scales {
        list_scales();
    } else {
        show_key(&options)?;
    }

    Ok(())
}
