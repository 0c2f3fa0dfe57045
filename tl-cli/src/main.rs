//! Command-line interface for tl
//! This binary parses TL schema files and prints them in different formats.
//!
//! Usage:
//!   tl `<path>` [--format `<format>`] [--config `<file>`]   - Parse and print a schema
//!   tl `<path>` --check                                  - Parse only, report counts
//!   tl --list-formats                                    - List all available formats

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tl_config::{Loader, TlConfig};
use tl_parser::tl::formats::{FormatRegistry, ListingFormatter, ProtoFormatter};
use tl_parser::tl::loader::SchemaLoader;

fn main() {
    let matches = Command::new("tl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and converting TL schema files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the TL schema file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: tl)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only parse the file and report what it contains")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(matches)?;
    let registry = build_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let path = matches
        .get_one::<String>("path")
        .context("path is required unless listing formats")?;

    if matches.get_flag("check") {
        return handle_check_command(path);
    }
    handle_print_command(&registry, path, &config.output.format)
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<TlConfig> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        log::debug!("layering config file {file}");
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build().context("failed to load configuration")
}

/// Default formatters, with the configurable ones replaced by configured instances.
fn build_registry(config: &TlConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(ListingFormatter {
        signed_ids: config.listing.signed_ids,
    });
    registry.register(ProtoFormatter {
        package: config.proto.package.clone(),
        field_offset: config.proto.field_offset,
        syntax: config.proto.syntax.clone(),
    });
    registry
}

/// Handle the print command
fn handle_print_command(registry: &FormatRegistry, path: &str, format: &str) -> anyhow::Result<()> {
    if !registry.has(format) {
        anyhow::bail!(
            "format '{format}' not found (available: {})",
            registry.list_formats().join(", ")
        );
    }
    let schema = SchemaLoader::from_path(path)?.parse()?;
    let output = registry.serialize(&schema, format)?;
    print!("{output}");
    Ok(())
}

/// Handle the check command
fn handle_check_command(path: &str) -> anyhow::Result<()> {
    let schema = SchemaLoader::from_path(path)?.parse()?;
    let layer = schema
        .layer
        .map_or_else(|| "none".to_string(), |layer| layer.to_string());
    println!(
        "{path}: {} type(s), {} function(s), {} class(es), layer {layer}",
        schema.types().count(),
        schema.functions().count(),
        schema.classes.len()
    );
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {name}");
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
