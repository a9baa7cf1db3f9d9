// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use notegen::config::GeneratorConfig;
use notegen::generators::progression::{DEFAULT_COMPLEXITY_TARGET, DEFAULT_LENGTH};
use notegen::{AdvancedRequest, ChordProgression, Pattern};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn print_usage() {
    println!("notegen - Chord progression generator");
    println!();
    println!("Usage: notegen [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>         Load settings from a YAML or TOML file");
    println!("  --key <KEY>             Key (e.g. C, F#, Bb; default C)");
    println!("  --scale <SCALE>         major or minor (default major)");
    println!("  --octave <N>            Octave of the tonic (default 4)");
    println!("  --seed <N>              Seed for random generation");
    println!("  --numerals <LIST>       Roman numerals, e.g. \"I-vi-IV-V\" or \"ii7,V7,IΔ\"");
    println!("  --genre <GENRE>         pop, jazz, blues or classical");
    println!("  --length <N>            Number of chords (random or genre patterns)");
    println!("  --tension               Add a dominant leading into a chord of the numerals");
    println!("  --advanced              Pick qualities from the complexity target");
    println!("  --complexity <X>        Complexity target for --advanced (0.0 - 1.0)");
    println!("  --preset <NAME>         Generate a named preset");
    println!("  --list-presets          List available presets");
    println!("  --events <PPQN>         Print note events instead of the progression");
    println!("  --verbose               Log generation steps");
    println!("  --help                  Show this help message");
}

/// Command-line options
#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    key: Option<String>,
    scale: Option<String>,
    octave: Option<u8>,
    seed: Option<u64>,
    numerals: Option<String>,
    genre: Option<String>,
    length: Option<usize>,
    tension: bool,
    advanced: bool,
    complexity: Option<f64>,
    preset: Option<String>,
    list_presets: bool,
    events: Option<u32>,
    verbose: bool,
    help: bool,
}

fn value<'a>(args: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String> {
    args.next().ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parsed<'a, T: FromStr>(args: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<T> {
    let text = value(args, flag)?;
    text.parse()
        .map_err(|_| anyhow!("Invalid value for {}: {}", flag, text))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config = Some(value(&mut iter, arg)?.clone()),
            "--key" => options.key = Some(value(&mut iter, arg)?.clone()),
            "--scale" => options.scale = Some(value(&mut iter, arg)?.clone()),
            "--octave" => options.octave = Some(parsed(&mut iter, arg)?),
            "--seed" => options.seed = Some(parsed(&mut iter, arg)?),
            "--numerals" => options.numerals = Some(value(&mut iter, arg)?.clone()),
            "--genre" => options.genre = Some(value(&mut iter, arg)?.clone()),
            "--length" => options.length = Some(parsed(&mut iter, arg)?),
            "--tension" => options.tension = true,
            "--advanced" => options.advanced = true,
            "--complexity" => options.complexity = Some(parsed(&mut iter, arg)?),
            "--preset" => options.preset = Some(value(&mut iter, arg)?.clone()),
            "--list-presets" => options.list_presets = true,
            "--events" => options.events = Some(parsed(&mut iter, arg)?),
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            other => bail!("Unknown option: {}", other),
        }
    }
    Ok(options)
}

fn load_config(options: &Options) -> Result<GeneratorConfig> {
    let mut config = match &options.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(key) = &options.key {
        config.key = key.clone();
    }
    if let Some(scale) = &options.scale {
        config.scale = scale.clone();
    }
    if let Some(octave) = options.octave {
        config.octave = octave;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    if options.complexity.is_some() {
        config.complexity = options.complexity;
    }
    Ok(config)
}

fn numeral_pattern(text: &str) -> Pattern {
    Pattern::numerals(
        text.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty()),
    )
}

fn list_presets(config: &GeneratorConfig) {
    let library = config.preset_library();
    for preset in library.iter() {
        if preset.tags.is_empty() {
            println!("{:<16} {}", preset.name, preset.numerals.join(" "));
        } else {
            println!(
                "{:<16} {:<32} [{}]",
                preset.name,
                preset.numerals.join(" "),
                preset.tags.join(", ")
            );
        }
    }
}

fn generate(options: &Options, config: &GeneratorConfig) -> Result<ChordProgression> {
    let generator = config.generator()?;
    let pattern = options.numerals.as_deref().map(numeral_pattern);

    let progression = if let Some(name) = &options.preset {
        generator.generate_from_preset(&config.preset_library(), name)?
    } else if options.advanced {
        let request = AdvancedRequest {
            pattern,
            genre: options.genre.clone(),
            length: options.length,
            complexity_target: config.complexity.unwrap_or(DEFAULT_COMPLEXITY_TARGET),
        };
        generator.generate_advanced(&request)?
    } else if options.tension {
        let pattern = pattern.context("--tension requires --numerals")?;
        generator.generate_with_tension_resolution(&pattern)?
    } else if let Some(genre) = &options.genre {
        generator.generate_genre_specific_pattern(genre, options.length.unwrap_or(DEFAULT_LENGTH))?
    } else {
        generator.generate(pattern.as_ref(), options.length)?
    };
    Ok(progression)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let level = if options.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&options)?;
    debug!(?config, "loaded configuration");

    if options.list_presets {
        list_presets(&config);
        return Ok(());
    }

    if options.numerals.is_none()
        && options.genre.is_none()
        && options.length.is_none()
        && options.preset.is_none()
    {
        eprintln!("Error: nothing to generate");
        eprintln!("Use --numerals, --genre, --length or --preset (see --help)");
        std::process::exit(1);
    }

    let progression = generate(&options, &config)?;

    let output = match options.events {
        Some(ppqn) => serde_yaml::to_string(&progression.to_events(ppqn)),
        None => serde_yaml::to_string(&progression),
    }
    .context("Failed to serialize output")?;
    print!("{}", output);

    Ok(())
}
