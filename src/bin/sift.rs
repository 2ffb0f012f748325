//! Command line interface for sift.
//!
//! ```text
//! sift extract reply.txt --mode object --format json
//! sift extract reply.txt -m attributes -k name,city
//! sift clean reply.txt
//! sift normalize reply.txt
//! sift truncate reply.txt -n 120
//! sift list-modes
//! ```
//!
//! Diagnostics go to stderr and default to warnings; set `RUST_LOG=debug`
//! to watch pipeline stages miss and repair rules fire.

use clap::{Arg, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use sift::formats::FormatRegistry;
use sift::processor::{process_file, RecoveryMode, RecoverySpec};
use sift::{clean_json_response, normalize_json_string, truncate_to_sentence};

fn main() {
    init_diagnostics();

    let matches = Command::new("sift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recover structured data from model replies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Run a recovery mode over a reply and print a report")
                .arg(
                    Arg::new("path")
                        .help("Input file containing the reply")
                        .required(true),
                )
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .default_value("object")
                        .help("Recovery mode (see list-modes)"),
                )
                .arg(
                    Arg::new("keys")
                        .short('k')
                        .long("keys")
                        .help("Comma-separated key names for attributes mode"),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .default_value("json")
                        .help("Output format (see list-modes)"),
                ),
        )
        .subcommand(
            Command::new("clean")
                .about("Print the best JSON candidate found in a reply")
                .arg(
                    Arg::new("path")
                        .help("Input file containing the reply")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print a reply after the JSON repair rules run")
                .arg(
                    Arg::new("path")
                        .help("Input file containing the reply")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("truncate")
                .about("Shorten a reply to a character limit")
                .arg(
                    Arg::new("path")
                        .help("Input file containing the reply")
                        .required(true),
                )
                .arg(
                    Arg::new("max-length")
                        .short('n')
                        .long("max-length")
                        .required(true)
                        .help("Maximum length in characters"),
                ),
        )
        .subcommand(
            Command::new("list-modes").about("List recovery modes and output formats"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", sub)) => run_extract(sub),
        Some(("clean", sub)) => run_clean(sub),
        Some(("normalize", sub)) => run_normalize(sub),
        Some(("truncate", sub)) => run_truncate(sub),
        Some(("list-modes", _)) => run_list_modes(),
        _ => unreachable!("subcommand is required"),
    }
}

fn init_diagnostics() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_extract(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let mode_name = matches.get_one::<String>("mode").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let mode = RecoveryMode::from_string(mode_name).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let keys: Vec<String> = matches
        .get_one::<String>("keys")
        .map(|raw| {
            raw.split(',')
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let spec = RecoverySpec::with_keys(mode, keys);
    let report = process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let registry = FormatRegistry::with_defaults();
    let rendered = registry.format(&report, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", rendered);
}

fn run_clean(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let text = read_input(path);
    println!("{}", clean_json_response(&text));
}

fn run_normalize(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let text = read_input(path);
    println!("{}", normalize_json_string(&text));
}

fn run_truncate(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let raw = matches.get_one::<String>("max-length").unwrap();
    let max_length = raw.parse::<usize>().unwrap_or_else(|_| {
        eprintln!("Error: --max-length must be a whole number, got '{}'", raw);
        std::process::exit(1);
    });

    let text = read_input(path);
    println!("{}", truncate_to_sentence(&text, max_length));
}

fn run_list_modes() {
    println!("Recovery modes:");
    for mode in RecoveryMode::all() {
        println!("  {:<12} {}", mode.name(), mode.description());
    }
    println!();
    println!("Output formats:");
    let registry = FormatRegistry::with_defaults();
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description().to_string())
            .unwrap_or_default();
        println!("  {:<12} {}", name, description);
    }
}

fn read_input(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error: failed to read {}: {}", path, e);
        std::process::exit(1);
    })
}
