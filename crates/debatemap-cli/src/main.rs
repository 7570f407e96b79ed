//! Debatemap CLI - Command-line driver for debate-map snapshot files.

use clap::Parser;
use debatemap_cli::commands;
use debatemap_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so command output stays clean; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> debatemap_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.output.color;

    let formatter = Formatter::new(format, color_enabled);

    let output = match cli.command {
        Command::New(args) => commands::execute_new(args, &config, &formatter)?,
        Command::Validate(args) => commands::execute_validate(args, &config, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &config, &formatter)?,
        Command::Layout(args) => commands::execute_layout(args, &config, &formatter)?,
        Command::Search(args) => commands::execute_search(args, &config, &formatter)?,
        Command::Add(args) => commands::execute_add(args, &config, &formatter)?,
        Command::Delete(args) => commands::execute_delete(args, &config, &formatter)?,
        Command::Reparent(args) => commands::execute_reparent(args, &config, &formatter)?,
        Command::Retarget(args) => commands::execute_retarget(args, &config, &formatter)?,
        Command::Participant(args) => commands::execute_participant(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
