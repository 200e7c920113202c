//! mstgraph CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use mstgraph_engine::EngineConfig;
use mstgraph_foundation::Region;
use mstgraph_runtime::{Repl, Session};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    datasets: Vec<PathBuf>,
    region: Region,
    commands: Vec<String>,
    scripts: Vec<PathBuf>,
    batch_mode: bool,
    verbose: bool,
    forward_depth: Option<usize>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "-r" | "--region" => {
                i += 1;
                config.region = value(args, i, "--region")?.parse()?;
            }
            "-e" | "--eval" => {
                i += 1;
                config.commands.push(value(args, i, "--eval")?.to_string());
            }
            "-s" | "--script" => {
                i += 1;
                config.scripts.push(PathBuf::from(value(args, i, "--script")?));
            }
            "--forward-depth" => {
                i += 1;
                let raw = value(args, i, "--forward-depth")?;
                config.forward_depth = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --forward-depth value: {raw}"))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.datasets.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mstgraph {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.verbose);

    let mut engine_config = EngineConfig::new();
    if let Some(depth) = config.forward_depth {
        engine_config = engine_config.with_forward_depth_limit(depth);
    }
    let mut session = Session::new(engine_config).with_region(config.region);
    for path in &config.datasets {
        session.load(config.region, path)?;
    }

    let mut repl = Repl::new(session)?;

    for script in &config.scripts {
        for output in repl.eval_file(script)? {
            println!("{output}");
        }
    }
    for output in repl.eval_lines(config.commands.iter().map(String::as_str))? {
        println!("{output}");
    }

    if config.batch_mode || !config.commands.is_empty() || !config.scripts.is_empty() {
        return Ok(());
    }

    if !config.datasets.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mmstgraph\x1b[0m - Relation index and expansion engine for game master data

\x1b[1mUSAGE:\x1b[0m
    mstgraph [OPTIONS] [DATASETS...]

\x1b[1mARGUMENTS:\x1b[0m
    [DATASETS...]    JSON or MessagePack datasets to load into --region

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -r, --region REGION      Region to load datasets into (default JP)
    -e, --eval COMMAND       Run a command and exit (repeatable)
    -s, --script FILE        Run a command file and exit (repeatable)
    -b, --batch              Load datasets and exit (no REPL)
    -v, --verbose            Log at debug level (RUST_LOG overrides)
    --forward-depth N        Forward expansion depth limit (default 8)

\x1b[1mEXAMPLES:\x1b[0m
    mstgraph jp.json                             Load jp.json, then start REPL
    mstgraph -r NA na.msgpack -e 'show svt 100100'
    mstgraph jp.json -e 'reverse buff 101 skillNp'
    mstgraph -b -v jp.json                       Load and report warnings

\x1b[1mREPL COMMANDS:\x1b[0m
    load <region> <path>         Load a dataset
    reload [region]              Reload from the last path
    use <region>                 Switch region
    show <kind> <id> [depth]     Forward expansion
    reverse <kind> <id> [depth]  Reverse expansion
    decode <funcType|-> <vals>   Decode a DataVals string
    warnings / stats / help / quit"
    );
}
