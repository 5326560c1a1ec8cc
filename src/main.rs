/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/* Custom libraries */
use config::{Config, ConfigError, RendererKind};
use generator::NameCursor;
use interpreter::{Interpreter, Outcome};
use renderer::{JsonRenderer, LogRenderer, NullRenderer, Renderer};

/* Modules */
#[macro_use]
mod shared;
mod building;
mod config;
mod diagnostics;
mod generator;
mod interpreter;
mod people;
mod renderer;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER)).init();

    let matches = cli().get_matches();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(matches.value_of("config").map(Path::new)));

    match matches.subcommand() {
        Some(("people", sub_matches)) => run_generator(&config, sub_matches),
        _ => run_display(&config, &matches),
    }
}

fn cli() -> Command<'static> {
    Command::new("elevator-display")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tracks people and elevators from a simulation event stream")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("Configuration file (default: ./config.toml if present)"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .takes_value(true)
                .value_name("FILE")
                .help("Read the event stream from FILE instead of stdin"),
        )
        .arg(
            Arg::new("renderer")
                .short('r')
                .long("renderer")
                .takes_value(true)
                .possible_values(["null", "log", "json"])
                .help("Where notifications go"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("File for the json renderer (default: stderr)"),
        )
        .subcommand(
            Command::new("people")
                .about("Generate person trip schedules for the simulator")
                .arg(
                    Arg::new("people")
                        .short('p')
                        .long("people")
                        .takes_value(true)
                        .help("Number of people to create"),
                )
                .arg(
                    Arg::new("trips")
                        .short('t')
                        .long("trips")
                        .takes_value(true)
                        .help("Number of trips each person will make"),
                )
                .arg(
                    Arg::new("delaymax")
                        .short('d')
                        .long("delaymax")
                        .takes_value(true)
                        .help("Maximum delay on a given floor"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .takes_value(true)
                        .help("Seed for a reproducible schedule"),
                ),
        )
}

fn run_display(config: &Config, matches: &ArgMatches) {
    let mut renderer_config = config.renderer.clone();
    if let Some(kind) = matches.value_of("renderer") {
        renderer_config.kind = unwrap_or_exit!(kind.parse::<RendererKind>());
    }
    if let Some(output) = matches.value_of("output") {
        renderer_config.output = Some(output.into());
    }

    let renderer: Box<dyn Renderer + Send> = match renderer_config.kind {
        RendererKind::Null => Box::new(NullRenderer),
        RendererKind::Log => Box::new(LogRenderer),
        RendererKind::Json => {
            let writer = unwrap_or_exit!(renderer::open_output(renderer_config.output.as_deref()));
            Box::new(JsonRenderer::new(writer))
        }
    };

    // Start the renderer thread
    let (forwarder, renderer_thread) = unwrap_or_exit!(renderer::spawn_renderer(renderer));

    let input: Box<dyn BufRead> = match matches.value_of("input") {
        Some(path) => Box::new(BufReader::new(unwrap_or_exit!(File::open(path)))),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut interpreter = unwrap_or_exit!(Interpreter::new(&config.interpreter, forwarder, io::stdout()));
    let outcome = unwrap_or_exit!(interpreter.run(input));
    log::info!(
        "read {} lines up to time {}: {} people left, {} warnings",
        interpreter.lines_read(),
        interpreter.time(),
        interpreter.roster().len(),
        interpreter.diagnostics().warning_count()
    );
    if let Some(warning) = interpreter.diagnostics().last_warning() {
        log::info!("last warning: {}", warning);
    }

    // Hang up on the renderer and let it drain
    drop(interpreter);
    if renderer_thread.join().is_err() {
        log::error!("renderer thread panicked");
    }

    match outcome {
        Outcome::Finished { message, warnings } => {
            log::info!("{} (warnings: {})", message, warnings);
        }
        Outcome::EndOfStream => log::debug!("input closed"),
    }
}

fn run_generator(config: &Config, matches: &ArgMatches) {
    let mut generator_config = config.generator.clone();
    if let Some(people) = matches.value_of("people") {
        generator_config.people = unwrap_or_exit!(positive(people, "people"));
    }
    if let Some(trips) = matches.value_of("trips") {
        generator_config.trips = unwrap_or_exit!(positive(trips, "trips"));
    }
    if let Some(delay_max) = matches.value_of("delaymax") {
        generator_config.delay_max = unwrap_or_exit!(positive(delay_max, "delaymax"));
    }

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(unwrap_or_exit!(seed.parse::<u64>())),
        None => StdRng::from_entropy(),
    };

    let mut names = NameCursor::new();
    let schedules = unwrap_or_exit!(generator::generate(&generator_config, &mut names, &mut rng));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for schedule in schedules.iter() {
        unwrap_or_exit!(writeln!(out, "{}", schedule));
    }
    unwrap_or_exit!(out.flush());
}

fn positive(value: &str, name: &'static str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NotPositive(name)),
    }
}
